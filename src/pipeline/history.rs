//! Synthetic trend history for a freshly extracted value.
//!
//! A lab report carries one point in time; the trend view needs a series.
//! Six prior monthly points are fabricated within ±10% of the current
//! value, then the current value closes the series exactly.

use chrono::NaiveDate;
use rand::Rng;

use crate::models::parameter::HistoryPoint;

/// Reference year for the synthetic series.
const TREND_YEAR: i32 = 2024;

/// Months carrying perturbed points, in order.
const TREND_MONTHS: [u32; 6] = [1, 2, 3, 4, 5, 6];

/// Month of the point holding the current value.
const CURRENT_MONTH: u32 = 7;

/// Full width of the perturbation band (±10%).
const VARIATION_SPAN: f64 = 0.2;

/// Fabricate a plausible series for `current`: six perturbed points on the
/// first of Jan–Jun, then `current` exactly on the first of Jul.
///
/// The RNG is injected so tests can seed it; only the ±10% magnitude bound
/// is guaranteed, never specific perturbed values.
pub fn synthesize_history(current: f64, rng: &mut impl Rng) -> Vec<HistoryPoint> {
    let mut history = Vec::with_capacity(TREND_MONTHS.len() + 1);

    for month in TREND_MONTHS {
        let variation = (rng.gen::<f64>() - 0.5) * VARIATION_SPAN;
        history.push(HistoryPoint {
            date: first_of_month(month),
            value: round2(current * (1.0 + variation)),
        });
    }

    history.push(HistoryPoint {
        date: first_of_month(CURRENT_MONTH),
        value: current,
    });

    history
}

/// First day of a month in the reference year. Months come from the fixed
/// tables above, so construction cannot fail.
pub(crate) fn first_of_month(month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(TREND_YEAR, month, 1).expect("valid calendar month")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
