//! Trend detection
//!
//! Fits an ordinary-least-squares line over day-indexed scores and classifies
//! the slope. The classification threshold carries a magnitude-relative floor
//! so near-zero-average pillars are not flagged as declining from noise.

use crate::stats;
use crate::types::{Trend, TrendLabel};

/// Minimum valid points before a trend is reported at all
pub const MIN_TREND_POINTS: usize = 3;

/// Absolute floor for the classification threshold
const SLOPE_THRESHOLD_FLOOR: f64 = 0.08;

/// Relative component: threshold scales with the mean score magnitude
const SLOPE_THRESHOLD_RATIO: f64 = 0.012;

/// Fit a linear trend over `(day_index, score)` points and classify it.
///
/// Fewer than [`MIN_TREND_POINTS`] points yields slope 0 with the
/// "Building baseline" label.
pub fn compute_trend(points: &[(f64, f64)]) -> Trend {
    if points.len() < MIN_TREND_POINTS {
        return Trend::building_baseline();
    }

    let slope = stats::ols_slope(points);
    let ys: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
    let mean_y = stats::mean(&ys).unwrap_or(0.0);
    let threshold = SLOPE_THRESHOLD_FLOOR.max(mean_y.abs() * SLOPE_THRESHOLD_RATIO);

    let label = if slope > threshold {
        TrendLabel::Improving
    } else if slope < -threshold {
        TrendLabel::Declining
    } else {
        TrendLabel::Stable
    };

    Trend { slope, label }
}
