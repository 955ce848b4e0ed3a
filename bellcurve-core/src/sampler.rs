//! Sample generation — normal variates via Box-Muller.

use rand::Rng;

use crate::params::DistributionParams;

/// Draw `count` independent samples from Normal(mean, std_dev²).
///
/// A non-positive or non-finite standard deviation degrades to a flat
/// sample set (every sample equals the mean) so the chart stays renderable
/// instead of erroring mid-gesture.
pub fn generate_samples<R: Rng>(
    params: &DistributionParams,
    count: usize,
    rng: &mut R,
) -> Vec<f64> {
    if !(params.std_dev > 0.0) || !params.std_dev.is_finite() || !params.mean.is_finite() {
        return vec![params.mean; count];
    }
    (0..count)
        .map(|_| normal_draw(rng, params.mean, params.std_dev))
        .collect()
}

/// One Box-Muller draw from Normal(mu, sigma²).
fn normal_draw<R: Rng>(rng: &mut R, mu: f64, sigma: f64) -> f64 {
    // u1 clamped away from zero: ln(0) is -inf.
    let u1: f64 = rng.gen::<f64>().max(1e-300);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mu + sigma * z
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeedPlan;

    fn params(mean: f64, std_dev: f64) -> DistributionParams {
        DistributionParams {
            mean,
            std_dev,
            min: 0.0,
            max: 100.0,
        }
    }

    #[test]
    fn produces_requested_count() {
        let mut rng = SeedPlan::new(1).rng_for(0);
        let samples = generate_samples(&params(20.0, 5.0), 1000, &mut rng);
        assert_eq!(samples.len(), 1000);
        assert!(samples.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn sample_moments_near_parameters() {
        let mut rng = SeedPlan::new(2).rng_for(0);
        let samples = generate_samples(&params(20.0, 5.0), 10_000, &mut rng);
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;

        // 10k draws: generous bounds, the seed is fixed so this is stable.
        assert!((mean - 20.0).abs() < 0.5, "mean drifted: {mean}");
        assert!((var.sqrt() - 5.0).abs() < 0.5, "std drifted: {}", var.sqrt());
    }

    #[test]
    fn zero_std_yields_flat_samples() {
        let mut rng = SeedPlan::new(3).rng_for(0);
        let samples = generate_samples(&params(20.0, 0.0), 100, &mut rng);
        assert!(samples.iter().all(|&s| s == 20.0));
    }

    #[test]
    fn negative_std_yields_flat_samples() {
        let mut rng = SeedPlan::new(3).rng_for(0);
        let samples = generate_samples(&params(-4.0, -1.0), 10, &mut rng);
        assert!(samples.iter().all(|&s| s == -4.0));
    }

    #[test]
    fn same_seed_same_samples() {
        let plan = SeedPlan::new(9);
        let a = generate_samples(&params(20.0, 5.0), 50, &mut plan.rng_for(1));
        let b = generate_samples(&params(20.0, 5.0), 50, &mut plan.rng_for(1));
        assert_eq!(a, b);
    }
}
