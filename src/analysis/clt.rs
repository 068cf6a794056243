//! Standardized-sum convergence (Central Limit Theorem).
//!
//! Runs m independent trials; each trial draws n fresh observations and
//! reduces them to their sum. With finite moments the sums are standardized
//! to `(s - n*mu) / (sigma*sqrt(n))`; otherwise the raw sums are returned and
//! the skip is recorded on the result, so the fallback is always observable.
//!
//! Trial-size sweeps (n ∈ {2, 5, 10, 30, 50, 100}) are a driver-level loop
//! over this single-n procedure.

use rand::Rng;

use crate::distribution::DistributionProvider;
use crate::error::SimError;
use crate::result::{AnalysisKind, ExperimentResult, Metadata, Reference, Standardization};
use crate::sampling::SampleGenerator;

/// Result of one CLT run for a fixed trial size.
#[derive(Debug, Clone, PartialEq)]
pub struct CltAnalysis {
    /// Law the trials were drawn from.
    pub distribution: String,
    /// Observations per trial.
    pub trial_size: usize,
    /// One value per trial: the trial sum, standardized when
    /// `standardization` is [`Standardization::Applied`].
    pub values: Vec<f64>,
    /// What happened to the standardization request.
    pub standardization: Standardization,
}

impl CltAnalysis {
    /// Number of trials.
    pub fn trial_count(&self) -> usize {
        self.values.len()
    }

    /// Empirical mean of the trial values.
    pub fn empirical_mean(&self) -> f64 {
        super::sample_mean(&self.values)
    }

    /// Empirical variance of the trial values.
    pub fn empirical_variance(&self) -> f64 {
        super::sample_variance(&self.values)
    }

    /// Package for artifact sinks.
    pub fn into_result(self) -> ExperimentResult {
        let trial_count = self.values.len();
        ExperimentResult {
            reference: Reference::StandardNormal,
            metadata: Metadata {
                kind: AnalysisKind::Clt,
                distribution: self.distribution,
                trial_size: Some(self.trial_size),
                trial_count: Some(trial_count),
                standardization: Some(self.standardization),
                seed: None,
            },
            values: self.values,
        }
    }
}

/// Run the CLT analysis: `trial_count` independent trials of `trial_size`
/// draws each, reduced to sums.
///
/// No two trials share draws. When `standardize` is set and the law's mean
/// and variance are both finite, each sum is transformed to zero mean and
/// unit variance under the theoretical moments; otherwise the raw sums are
/// returned with [`Standardization::Skipped`] recorded.
///
/// # Errors
///
/// Fails with [`SimError::InvalidSampleSize`] for `trial_size == 0` and
/// [`SimError::InvalidTrialCount`] for `trial_count == 0`, before any
/// entropy is consumed.
pub fn analyze<D, R>(
    provider: &D,
    generator: &mut SampleGenerator<R>,
    trial_size: usize,
    trial_count: usize,
    standardize: bool,
) -> Result<CltAnalysis, SimError>
where
    D: DistributionProvider,
    R: Rng,
{
    if trial_size == 0 {
        return Err(SimError::InvalidSampleSize);
    }
    if trial_count == 0 {
        return Err(SimError::InvalidTrialCount);
    }

    let moments = provider.moments();
    let (standardization, scale_params) = if !standardize {
        (Standardization::NotRequested, None)
    } else {
        match (moments.mean.finite(), moments.variance.finite()) {
            (Some(mean), Some(variance)) => {
                (Standardization::Applied, Some((mean, variance.sqrt())))
            }
            _ => {
                tracing::warn!(
                    distribution = provider.name(),
                    mean = %moments.mean,
                    variance = %moments.variance,
                    "standardization skipped: moments are not both finite"
                );
                (
                    Standardization::Skipped {
                        mean: moments.mean,
                        variance: moments.variance,
                    },
                    None,
                )
            }
        }
    };

    tracing::debug!(
        distribution = provider.name(),
        trial_size,
        trial_count,
        standardized = standardization.applied(),
        "running trials"
    );

    let mut values = Vec::with_capacity(trial_count);
    for _ in 0..trial_count {
        let trial = generator.draw(provider, trial_size)?;
        values.push(trial.iter().sum::<f64>());
    }

    if let Some((mean, sigma)) = scale_params {
        let n = trial_size as f64;
        for sum in &mut values {
            *sum = (*sum - n * mean) / (sigma * n.sqrt());
        }
    }

    Ok(CltAnalysis {
        distribution: provider.name().to_string(),
        trial_size,
        values,
        standardization,
    })
}
