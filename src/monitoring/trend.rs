//! Trend Derivation
//!
//! Compares the mean of the most recent week of values against the week
//! before it. Input series are newest-first.

use serde::Serialize;

/// Number of values in each comparison window
pub const TREND_WINDOW: usize = 7;

/// Direction of a trend
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Percentage change between two consecutive windows
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Trend {
    /// Signed percentage change, recent vs older
    pub percent: f64,
    pub direction: TrendDirection,
}

impl Trend {
    /// Compute the trend of a newest-first series
    pub fn of(values: &[f64]) -> Self {
        let percent = calculate_trend(values);
        let direction = if percent > 0.0 {
            TrendDirection::Up
        } else if percent < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };

        Self { percent, direction }
    }

    /// Unsigned magnitude formatted to one decimal place, e.g. "4.2%"
    pub fn magnitude_label(&self) -> String {
        format!("{:.1}%", self.percent.abs())
    }
}

/// Percentage change of the first `TREND_WINDOW` values against the next
/// `TREND_WINDOW` values.
///
/// Returns 0 when there are fewer than two values, when the older window
/// is empty, when its mean is zero, or when the result is not finite.
pub fn calculate_trend(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let recent = &values[..values.len().min(TREND_WINDOW)];
    let older = values
        .get(TREND_WINDOW..values.len().min(TREND_WINDOW * 2))
        .unwrap_or(&[]);

    let (Some(recent_mean), Some(older_mean)) = (mean(recent), mean(older)) else {
        return 0.0;
    };

    if older_mean == 0.0 {
        return 0.0;
    }

    let percent = (recent_mean - older_mean) / older_mean * 100.0;
    if percent.is_finite() {
        percent
    } else {
        0.0
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
