//! Shared numeric utilities
//!
//! Small mean / standard-deviation / regression helpers used by the trend
//! analyzer and the bedtime consistency scorer.

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Population standard deviation, `None` for an empty slice
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance: f64 =
        values.iter().map(|v| (v - avg) * (v - avg)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Ordinary-least-squares slope of y on x.
///
/// Returns 0.0 when the points carry no x-variance (including empty input),
/// so degenerate windows read as flat rather than propagating NaN.
pub fn ols_slope(points: &[(f64, f64)]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let n = points.len() as f64;
    let mean_x: f64 = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y: f64 = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (x, y) in points {
        numerator += (x - mean_x) * (y - mean_y);
        denominator += (x - mean_x) * (x - mean_x);
    }

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_values() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), Some(4.0));
    }

    #[test]
    fn test_population_std_dev_constant() {
        assert_eq!(population_std_dev(&[5.0, 5.0, 5.0]), Some(0.0));
    }

    #[test]
    fn test_population_std_dev_known_value() {
        // Population std dev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std = population_std_dev(&values).unwrap();
        assert!((std - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ols_slope_linear() {
        let points: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 3.0 * i as f64 + 1.0)).collect();
        assert!((ols_slope(&points) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_ols_slope_constant_y() {
        let points: Vec<(f64, f64)> = (0..5).map(|i| (i as f64, 7.0)).collect();
        assert_eq!(ols_slope(&points), 0.0);
    }

    #[test]
    fn test_ols_slope_zero_x_variance() {
        let points = [(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)];
        assert_eq!(ols_slope(&points), 0.0);
    }

    #[test]
    fn test_ols_slope_empty() {
        assert_eq!(ols_slope(&[]), 0.0);
    }
}
