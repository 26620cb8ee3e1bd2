//! Reference knowledge base: immutable lookup tables for the fixed set of
//! named lab parameters, loaded once into the binary.
//!
//! All tables are keyed by the exact normalized (trimmed, uppercased) name
//! the extractor produces. A name that misses its key — e.g. the keyword
//! pass emitting "LDL" where the table says "LDL CHOLESTEROL" — falls
//! through to the unrecognized-parameter default.

use crate::models::enums::Category;
use crate::models::parameter::RangeThreshold;

/// Display reference-range strings for known parameters.
const DISPLAY_RANGES: &[(&str, &str)] = &[
    ("GLUCOSE", "70-99 mg/dL"),
    ("CHOLESTEROL", "<200 mg/dL"),
    ("HDL CHOLESTEROL", ">40 mg/dL"),
    ("LDL CHOLESTEROL", "<100 mg/dL"),
    ("TRIGLYCERIDES", "<150 mg/dL"),
    ("HEMOGLOBIN A1C", "<5.7%"),
    ("CREATININE", "0.7-1.3 mg/dL"),
    ("BUN", "7-20 mg/dL"),
    ("SODIUM", "136-145 mEq/L"),
    ("POTASSIUM", "3.5-5.0 mEq/L"),
    ("VITAMIN D", "30-100 ng/mL"),
    ("TSH", "0.4-4.0 mIU/L"),
];

/// Panel category per known parameter.
const CATEGORIES: &[(&str, Category)] = &[
    ("GLUCOSE", Category::Diabetes),
    ("HEMOGLOBIN A1C", Category::Diabetes),
    ("CHOLESTEROL", Category::LipidPanel),
    ("HDL CHOLESTEROL", Category::LipidPanel),
    ("LDL CHOLESTEROL", Category::LipidPanel),
    ("TRIGLYCERIDES", Category::LipidPanel),
    ("CREATININE", Category::KidneyFunction),
    ("BUN", Category::KidneyFunction),
    ("SODIUM", Category::Electrolytes),
    ("POTASSIUM", Category::Electrolytes),
    ("VITAMIN D", Category::Vitamins),
    ("TSH", Category::ThyroidFunction),
];

/// Numeric classification range for a known parameter.
struct KnownRange {
    name: &'static str,
    min: f64,
    max: f64,
}

/// Default numeric ranges used when no explicit range was parsed from the
/// text. These bound the normal band, not physiological possibility.
const DEFAULT_RANGES: &[KnownRange] = &[
    KnownRange { name: "GLUCOSE", min: 70.0, max: 99.0 },
    KnownRange { name: "CHOLESTEROL", min: 0.0, max: 200.0 },
    KnownRange { name: "HDL CHOLESTEROL", min: 40.0, max: 100.0 },
    KnownRange { name: "LDL CHOLESTEROL", min: 0.0, max: 100.0 },
    KnownRange { name: "TRIGLYCERIDES", min: 0.0, max: 150.0 },
    KnownRange { name: "CREATININE", min: 0.7, max: 1.3 },
    KnownRange { name: "BUN", min: 7.0, max: 20.0 },
    KnownRange { name: "SODIUM", min: 136.0, max: 145.0 },
    KnownRange { name: "POTASSIUM", min: 3.5, max: 5.0 },
    KnownRange { name: "VITAMIN D", min: 30.0, max: 100.0 },
    KnownRange { name: "TSH", min: 0.4, max: 4.0 },
];

/// Single-sided critical ceilings. A value above the ceiling is flagged
/// critical when no explicit range was parsed for the parameter.
const CRITICAL_CEILINGS: &[(&str, f64)] = &[
    ("GLUCOSE", 400.0),
    ("CHOLESTEROL", 300.0),
    ("LDL CHOLESTEROL", 190.0),
    ("TRIGLYCERIDES", 500.0),
    ("CREATININE", 3.0),
    ("BUN", 50.0),
];

/// Display string for a parameter's reference range; the literal "Normal"
/// for anything unrecognized. Display fallback only — used when no explicit
/// range was extracted from the text.
pub fn reference_range_text(name: &str, _unit: &str) -> String {
    DISPLAY_RANGES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, display)| (*display).to_string())
        .unwrap_or_else(|| "Normal".to_string())
}

/// Panel category for a parameter; `General` for anything unrecognized.
pub fn category_of(name: &str) -> Category {
    CATEGORIES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, category)| category.clone())
        .unwrap_or(Category::General)
}

/// Default numeric classification range, if the parameter is known.
pub fn default_range(name: &str) -> Option<RangeThreshold> {
    DEFAULT_RANGES
        .iter()
        .find(|range| range.name == name)
        .map(|range| RangeThreshold {
            min: Some(range.min),
            max: Some(range.max),
        })
}

/// Critical ceiling, if one is defined for the parameter.
pub fn critical_ceiling(name: &str) -> Option<f64> {
    CRITICAL_CEILINGS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, ceiling)| *ceiling)
}
