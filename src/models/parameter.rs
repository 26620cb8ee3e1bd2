use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{Category, Status};

/// One structured lab parameter produced by the pipeline.
///
/// `id` is unique within a batch and preserves extraction order;
/// `name` is normalized (trimmed, uppercased) and unique within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    /// Display string: either the range parsed from the text
    /// ("70-99 mg/dL") or the knowledge-base default for the parameter.
    pub reference_range: String,
    pub status: Status,
    pub category: Category,
    /// Chronologically ordered; the last point always equals `value`.
    pub history: Vec<HistoryPoint>,
}

/// One (date, value) sample in a parameter's trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Numeric reference bounds; `None` means unbounded on that side
/// (e.g. "<200" carries only a max).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeThreshold {
    pub min: Option<f64>,
    pub max: Option<f64>,
}
