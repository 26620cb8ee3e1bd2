//! Two-pass pattern extraction of lab parameters from free text.
//!
//! Pass 1 is a generic `label: value unit (min - max unit)` matcher; pass 2
//! re-scans the same text anchored on a fixed vocabulary of known parameter
//! names. Results merge in pass order and the first match for a normalized
//! name wins — later duplicates from either pass are dropped silently.

use std::collections::HashSet;

use regex::{Captures, Regex};

use super::types::RawMatch;

/// Known parameter names for the keyword-anchored pass.
///
/// Several entries ("HDL", "LDL", "VITAMIN", ...) are shorter than the
/// multi-word knowledge-base keys ("LDL CHOLESTEROL", "VITAMIN D"), so a
/// parameter found only by this pass falls through to the General category
/// and "Normal" display range.
const KEYWORD_VOCABULARY: &str = "GLUCOSE|CHOLESTEROL|HDL|LDL|TRIGLYCERIDES|HEMOGLOBIN|CREATININE|BUN|SODIUM|POTASSIUM|VITAMIN|TSH";

/// Generic pass: word-token label, optional colon, decimal value, unit,
/// optional parenthesized "min - max" range.
fn generic_pattern() -> Regex {
    Regex::new(
        r"(?i)(\w+(?:\s+\w+)*)\s*:?\s*(\d+\.?\d*)\s*(\w+/?\w*)\s*(?:\(.*?(\d+\.?\d*)\s*-\s*(\d+\.?\d*).*?\))?",
    )
    .unwrap()
}

/// Keyword pass: known parameter name, comma or colon, decimal value, unit.
fn keyword_pattern() -> Regex {
    Regex::new(&format!(
        r"(?i)({KEYWORD_VOCABULARY})\s*[,:]\s*(\d+\.?\d*)\s*(\w+/?\w*)"
    ))
    .unwrap()
}

/// Run both pattern passes over `text` and return candidates in match
/// order, deduplicated by normalized name (first match wins).
///
/// No matches is not an error: the caller substitutes the sample dataset.
pub fn extract_parameters(text: &str) -> Vec<RawMatch> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut matches = Vec::new();

    for pattern in [generic_pattern(), keyword_pattern()] {
        for caps in pattern.captures_iter(text) {
            let Some(candidate) = build_candidate(&caps) else {
                continue;
            };
            if seen.insert(candidate.name.clone()) {
                matches.push(candidate);
            }
        }
    }

    tracing::debug!(count = matches.len(), "pattern passes complete");
    matches
}

/// Build a candidate from one capture set. Returns `None` when the numeric
/// groups fail to parse — a dropped candidate, never an error.
fn build_candidate(caps: &Captures<'_>) -> Option<RawMatch> {
    let name = caps.get(1)?.as_str().trim().to_uppercase();
    let value: f64 = caps.get(2)?.as_str().parse().ok()?;
    let unit = caps
        .get(3)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let min_range = caps.get(4).and_then(|m| m.as_str().parse().ok());
    let max_range = caps.get(5).and_then(|m| m.as_str().parse().ok());

    Some(RawMatch {
        name,
        value,
        unit,
        min_range,
        max_range,
    })
}
