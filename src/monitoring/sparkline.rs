//! Sparkline Coordinate Generation
//!
//! Maps the most recent two weeks of a newest-first series onto a
//! 0..100 plotting box, oldest value on the left.

use serde::Serialize;
use std::fmt::Write;

/// Number of values drawn in a sparkline
pub const SPARKLINE_WINDOW: usize = 14;

/// A point in the normalized plotting box
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An inline line chart ready to be drawn
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Sparkline {
    pub color: String,
    pub points: Vec<Point>,
}

impl Sparkline {
    /// Build a sparkline for a newest-first series. `None` for an empty series.
    pub fn from_series(values: &[f64], color: impl Into<String>) -> Option<Self> {
        let points = sparkline_points(values);
        if points.is_empty() {
            return None;
        }

        Some(Self {
            color: color.into(),
            points,
        })
    }

    /// The `points` attribute of an SVG polyline: "x,y x,y ..."
    pub fn polyline_points(&self) -> String {
        let mut out = String::with_capacity(self.points.len() * 12);
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", trim_float(p.x), trim_float(p.y));
        }
        out
    }

    /// Render as a standalone inline SVG element
    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg class="w-full h-16" viewBox="0 0 100 100" preserveAspectRatio="none"><polyline points="{}" fill="none" stroke="{}" stroke-width="2" class="drop-shadow-sm"/></svg>"#,
            self.polyline_points(),
            self.color
        )
    }
}

/// Normalized coordinates for the first `SPARKLINE_WINDOW` values.
///
/// x runs `index / 13 * 100`, y is inverted so larger values sit higher.
/// Min and max come from the drawn window only, not the whole series:
/// values past the first 14 do not affect the scale.
/// A flat window has its range forced to 1, placing every point at y = 100.
pub fn sparkline_points(values: &[f64]) -> Vec<Point> {
    if values.is_empty() {
        return Vec::new();
    }

    let window: Vec<f64> = values
        .iter()
        .take(SPARKLINE_WINDOW)
        .rev()
        .copied()
        .collect();

    let min = window.iter().copied().fold(f64::INFINITY, f64::min);
    let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let last_index = (SPARKLINE_WINDOW - 1) as f64;

    window
        .iter()
        .enumerate()
        .map(|(i, v)| Point {
            x: i as f64 / last_index * 100.0,
            y: 100.0 - (v - min) / range * 100.0,
        })
        .collect()
}

/// Print a coordinate with at most three decimals and no trailing zeros
fn trim_float(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
