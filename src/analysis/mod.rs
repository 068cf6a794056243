//! The statistical analysis procedures.
//!
//! 1. **SLLN** ([`slln`]): running cumulative mean of one growing sequence,
//!    compared against the theoretical mean.
//! 2. **CLT** ([`clt`]): repeated fixed-size trials reduced to sums,
//!    optionally standardized, for normality comparison.
//! 3. **Monte Carlo** ([`monte_carlo`]): running region-measure estimate from
//!    uniform points and an inclusion predicate.

pub mod clt;
pub mod monte_carlo;
pub mod slln;

pub use clt::CltAnalysis;
pub use monte_carlo::{MonteCarloAnalysis, RegionEstimator};
pub use slln::{RunningMean, SllnAnalysis};

/// Sample mean of a slice.
pub fn sample_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample variance of a slice (n - 1 denominator).
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = sample_mean(values);
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_mean_and_variance() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((sample_mean(&data) - 3.0).abs() < 1e-12);
        assert!((sample_variance(&data) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(sample_mean(&[]), 0.0);
        assert_eq!(sample_variance(&[7.0]), 0.0);
    }
}
