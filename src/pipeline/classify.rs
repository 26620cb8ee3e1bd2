//! Status classification of a value against reference bounds.

use crate::models::enums::Status;
use crate::pipeline::reference;

/// Classify a parameter value.
///
/// Decision order is a fixed policy:
/// 1. An explicit range parsed from the text (both bounds present) is
///    authoritative — the critical ceiling is not consulted on this path.
/// 2. Without an explicit range, a value above the parameter's critical
///    ceiling is critical.
/// 3. Otherwise the knowledge-base default range decides; a parameter with
///    no default range is normal.
pub fn classify(
    name: &str,
    value: f64,
    min_range: Option<f64>,
    max_range: Option<f64>,
) -> Status {
    if let (Some(min), Some(max)) = (min_range, max_range) {
        return against_bounds(value, Some(min), Some(max));
    }

    if let Some(ceiling) = reference::critical_ceiling(name) {
        if value > ceiling {
            return Status::Critical;
        }
    }

    match reference::default_range(name) {
        Some(range) => against_bounds(value, range.min, range.max),
        None => Status::Normal,
    }
}

fn against_bounds(value: f64, min: Option<f64>, max: Option<f64>) -> Status {
    if let Some(min) = min {
        if value < min {
            return Status::Low;
        }
    }
    if let Some(max) = max {
        if value > max {
            return Status::High;
        }
    }
    Status::Normal
}
