//! Density estimation — analytic normal pdf over the realized sample set.

use serde::{Deserialize, Serialize};

/// One point of the theoretical bell curve: a sample value and the normal
/// density evaluated at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub value: f64,
    pub density: f64,
}

/// Variance proxy: `sum(samples) * p * (1 - p)` with `p = 1/len`.
///
/// This is NOT the sample variance. It is the historical formula of this
/// visualization and is kept bit-for-bit for compatibility — numerical
/// regression tests pin it. It goes non-positive whenever the sample sum
/// does, which downstream surfaces as a degenerate (non-finite) curve.
/// Swap this function out to get a conventional estimator; `density_curve`
/// and all callers only see the resulting variance value.
pub fn variance_proxy(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().sum();
    let p = 1.0 / samples.len() as f64;
    sum * p * (1.0 - p)
}

/// Normal pdf `exp(-(x-mean)²/(2v)) / sqrt(2πv)`.
///
/// No guarding of `variance <= 0`: the result is NaN/∞ and flows through
/// untouched. Detection happens at the frame level, rendering skips
/// non-finite points.
pub fn normal_pdf(x: f64, mean: f64, variance: f64) -> f64 {
    let norm = (2.0 * std::f64::consts::PI * variance).sqrt();
    let e = (-(x - mean).powi(2) / (2.0 * variance)).exp();
    e / norm
}

/// Evaluate the density at every sample, sorted ascending by value.
///
/// One point per sample; the sort order is the rendering contract (the
/// curve is drawn as a single connected path through these points).
pub fn density_curve(samples: &[f64], mean: f64) -> Vec<DensityPoint> {
    let variance = variance_proxy(samples);
    let mut points: Vec<DensityPoint> = samples
        .iter()
        .map(|&value| DensityPoint {
            value,
            density: normal_pdf(value, mean, variance),
        })
        .collect();
    points.sort_by(|a, b| a.value.total_cmp(&b.value));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variance_proxy_matches_formula() {
        // sum = 10, p = 0.25: 10 * 0.25 * 0.75 = 1.875
        let samples = [1.0, 2.0, 3.0, 4.0];
        assert!((variance_proxy(&samples) - 1.875).abs() < 1e-12);
    }

    #[test]
    fn variance_proxy_empty_is_zero() {
        assert_eq!(variance_proxy(&[]), 0.0);
    }

    #[test]
    fn variance_proxy_goes_negative_with_negative_sum() {
        assert!(variance_proxy(&[-10.0, -20.0]) < 0.0);
    }

    #[test]
    fn pdf_peak_at_mean() {
        // N(0, 1) at 0: 1/sqrt(2π)
        let peak = normal_pdf(0.0, 0.0, 1.0);
        assert!((peak - 0.398_942_280_401_432_7).abs() < 1e-12);
    }

    #[test]
    fn pdf_symmetric_about_mean() {
        let lo = normal_pdf(18.7, 20.0, 4.0);
        let hi = normal_pdf(21.3, 20.0, 4.0);
        assert!((lo - hi).abs() < 1e-12);
    }

    #[test]
    fn pdf_nonpositive_variance_is_nonfinite() {
        assert!(normal_pdf(1.0, 0.0, 0.0).is_nan() || !normal_pdf(1.0, 0.0, 0.0).is_finite());
        assert!(!normal_pdf(1.0, 0.0, -2.0).is_finite() || normal_pdf(1.0, 0.0, -2.0).is_nan());
    }

    #[test]
    fn curve_sorted_one_point_per_sample() {
        let samples = [5.0, -3.0, 12.0, 0.5, -3.0];
        let curve = density_curve(&samples, 2.0);
        assert_eq!(curve.len(), samples.len());
        for pair in curve.windows(2) {
            assert!(pair[0].value <= pair[1].value);
        }
    }

    #[test]
    fn curve_density_uses_proxy_variance() {
        let samples = [1.0, 2.0, 3.0, 4.0];
        let curve = density_curve(&samples, 2.5);
        let v = variance_proxy(&samples);
        assert_eq!(curve[0].density, normal_pdf(1.0, 2.5, v));
    }
}
