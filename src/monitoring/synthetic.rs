//! Synthetic fallback data
//!
//! Generates a plausible month of daily records when the store cannot
//! provide any. Values are random; shape, count and dates are fixed.

use chrono::{Days, NaiveDate, Utc};
use rand::Rng;

use super::types::MetricRecord;

/// Number of days generated for the fallback set
pub const SYNTHETIC_DAYS: usize = 30;

/// Generate `SYNTHETIC_DAYS` records ending today, newest first
pub fn generate_synthetic_metrics() -> Vec<MetricRecord> {
    generate_synthetic_metrics_from(Utc::now().date_naive(), &mut rand::rng())
}

/// Generate `SYNTHETIC_DAYS` records ending at `today`, newest first
pub fn generate_synthetic_metrics_from<R: Rng>(
    today: NaiveDate,
    rng: &mut R,
) -> Vec<MetricRecord> {
    (0..SYNTHETIC_DAYS)
        .map(|i| {
            let metric_date = today
                .checked_sub_days(Days::new(i as u64))
                .unwrap_or(NaiveDate::MIN);

            MetricRecord {
                id: format!("mock-{}", i),
                metric_date,
                heart_rate: rng.random_range(65..85),
                blood_pressure_systolic: rng.random_range(115..130),
                blood_pressure_diastolic: rng.random_range(70..85),
                blood_glucose: rng.random_range(85..105),
                // slow downward drift so the weight card has a trend to show
                weight: 75.0 - i as f64 * 0.1 + rng.random_range(0.0..2.0),
                steps: rng.random_range(7000..12000),
                sleep_hours: 6.5 + rng.random_range(0.0..2.0),
                water_intake: 2.0 + rng.random_range(0.0..1.5),
            }
        })
        .collect()
}
