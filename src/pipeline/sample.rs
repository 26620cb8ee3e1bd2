//! Fixed fallback dataset returned when extraction finds nothing.
//!
//! Unlike synthesized histories these records are fully literal and must be
//! reproduced bit-exact on every call.

use crate::models::enums::{Category, Status};
use crate::models::parameter::{HistoryPoint, ParameterRecord};
use crate::pipeline::history::first_of_month;

/// The three sample records: glucose, total cholesterol, LDL cholesterol.
pub fn sample_records() -> Vec<ParameterRecord> {
    vec![
        ParameterRecord {
            id: "glucose".into(),
            name: "GLUCOSE".into(),
            value: 95.0,
            unit: "mg/dL".into(),
            reference_range: "70-99 mg/dL".into(),
            status: Status::Normal,
            category: Category::Diabetes,
            history: monthly_trend([92.0, 89.0, 94.0, 91.0, 93.0, 96.0, 95.0]),
        },
        ParameterRecord {
            id: "cholesterol".into(),
            name: "TOTAL CHOLESTEROL".into(),
            value: 185.0,
            unit: "mg/dL".into(),
            reference_range: "<200 mg/dL".into(),
            status: Status::Normal,
            category: Category::LipidPanel,
            history: monthly_trend([190.0, 188.0, 192.0, 186.0, 183.0, 181.0, 185.0]),
        },
        ParameterRecord {
            id: "ldl".into(),
            name: "LDL CHOLESTEROL".into(),
            value: 110.0,
            unit: "mg/dL".into(),
            reference_range: "<100 mg/dL".into(),
            status: Status::High,
            category: Category::LipidPanel,
            history: monthly_trend([115.0, 118.0, 112.0, 108.0, 105.0, 107.0, 110.0]),
        },
    ]
}

/// Seven points on the first of Jan–Jul 2024.
fn monthly_trend(values: [f64; 7]) -> Vec<HistoryPoint> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| HistoryPoint {
            date: first_of_month(i as u32 + 1),
            value,
        })
        .collect()
}
