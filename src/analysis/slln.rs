//! Cumulative-mean convergence (Strong Law of Large Numbers).
//!
//! Draws one sequence and reduces it to its running mean: element i is the
//! average of the first i observations. The accumulator is incremental,
//! O(1) work per new draw the way an online statistic is maintained, rather
//! than recomputing each prefix from scratch.

use rand::Rng;

use crate::distribution::{DistributionProvider, Moment};
use crate::error::SimError;
use crate::result::{AnalysisKind, ExperimentResult, Metadata, Reference};
use crate::sampling::SampleGenerator;

/// Incremental prefix-mean accumulator.
///
/// # Example
///
/// ```
/// use convergence_lab::analysis::RunningMean;
///
/// let mut running = RunningMean::new();
/// assert_eq!(running.push(2.0), 2.0);
/// assert_eq!(running.push(4.0), 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningMean {
    count: usize,
    sum: f64,
}

impl RunningMean {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb one observation and return the mean of everything seen so far.
    pub fn push(&mut self, x: f64) -> f64 {
        self.count += 1;
        self.sum += x;
        self.sum / self.count as f64
    }

    /// Number of observations absorbed.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Result of one SLLN run: the running-mean sequence and its target.
#[derive(Debug, Clone, PartialEq)]
pub struct SllnAnalysis {
    /// Law the observations came from.
    pub distribution: String,
    /// Running mean indexed by sample count; element i averages the first
    /// i + 1 raw draws.
    pub running_mean: Vec<f64>,
    /// Theoretical mean the sequence converges to, when it exists.
    pub theoretical_mean: Moment,
}

impl SllnAnalysis {
    /// The cumulative mean over the full sequence.
    pub fn final_mean(&self) -> f64 {
        *self.running_mean.last().expect("sequence is non-empty by construction")
    }

    /// Package for artifact sinks.
    pub fn into_result(self) -> ExperimentResult {
        ExperimentResult {
            values: self.running_mean,
            reference: Reference::Mean(self.theoretical_mean),
            metadata: Metadata {
                kind: AnalysisKind::Slln,
                distribution: self.distribution,
                trial_size: None,
                trial_count: None,
                standardization: None,
                seed: None,
            },
        }
    }
}

/// Run the SLLN analysis: `sample_count` draws, running mean per prefix.
///
/// Element 1 of the output equals the first raw draw exactly; element i
/// depends only on the first i draws. For the Cauchy law the sequence is
/// still produced, but [`SllnAnalysis::theoretical_mean`] is
/// [`Moment::Undefined`] and there is no convergence target.
///
/// # Errors
///
/// Fails with [`SimError::InvalidSampleSize`] for `sample_count == 0`,
/// before any entropy is consumed.
pub fn analyze<D, R>(
    provider: &D,
    generator: &mut SampleGenerator<R>,
    sample_count: usize,
) -> Result<SllnAnalysis, SimError>
where
    D: DistributionProvider,
    R: Rng,
{
    let observations = generator.draw(provider, sample_count)?;
    tracing::debug!(
        distribution = provider.name(),
        sample_count,
        "computing running mean"
    );

    let mut running = RunningMean::new();
    let running_mean: Vec<f64> = observations.iter().map(|&x| running.push(x)).collect();

    Ok(SllnAnalysis {
        distribution: provider.name().to_string(),
        running_mean,
        theoretical_mean: provider.moments().mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::{Distribution, Moments};

    /// Degenerate provider: every draw is the same constant.
    struct Constant(f64);

    impl DistributionProvider for Constant {
        fn name(&self) -> &str {
            "Constant"
        }

        fn moments(&self) -> Moments {
            Moments {
                mean: Moment::Finite(self.0),
                variance: Moment::Finite(0.0),
            }
        }

        fn sample_one<R: Rng>(&self, _rng: &mut R) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_running_mean_matches_batch() {
        let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        let mut running = RunningMean::new();
        for (i, &x) in data.iter().enumerate() {
            let online = running.push(x);
            let batch = data[..=i].iter().sum::<f64>() / (i + 1) as f64;
            assert!(
                (online - batch).abs() < 1e-12,
                "prefix {}: online={online}, batch={batch}",
                i + 1
            );
        }
    }

    #[test]
    fn test_sequence_has_requested_length() {
        let mut generator = SampleGenerator::seeded(3);
        let analysis = analyze(&Distribution::Uniform, &mut generator, 500).unwrap();
        assert_eq!(analysis.running_mean.len(), 500);
    }

    #[test]
    fn test_first_element_is_first_draw() {
        // Two generators with the same seed: one raw draw, one analysis.
        let mut raw = SampleGenerator::seeded(21);
        let first = raw.draw(&Distribution::Exponential, 1).unwrap()[0];

        let mut generator = SampleGenerator::seeded(21);
        let analysis = analyze(&Distribution::Exponential, &mut generator, 100).unwrap();
        assert_eq!(analysis.running_mean[0], first);
    }

    #[test]
    fn test_constant_provider_is_exact() {
        let mut generator = SampleGenerator::seeded(0);
        let analysis = analyze(&Constant(3.5), &mut generator, 50).unwrap();
        assert!(analysis.running_mean.iter().all(|&m| m == 3.5));
        assert_eq!(analysis.theoretical_mean, Moment::Finite(3.5));
    }

    #[test]
    fn test_cauchy_has_no_convergence_target() {
        let mut generator = SampleGenerator::seeded(8);
        let analysis = analyze(&Distribution::Cauchy, &mut generator, 1_000).unwrap();
        assert_eq!(analysis.theoretical_mean, Moment::Undefined);
        assert_eq!(analysis.running_mean.len(), 1_000);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut generator = SampleGenerator::seeded(8);
        let err = analyze(&Distribution::Uniform, &mut generator, 0).unwrap_err();
        assert_eq!(err, SimError::InvalidSampleSize);
    }

    #[test]
    fn test_into_result_carries_reference_mean() {
        let mut generator = SampleGenerator::seeded(4);
        let result = analyze(&Distribution::Uniform, &mut generator, 10)
            .unwrap()
            .into_result();
        assert_eq!(result.reference, Reference::Mean(Moment::Finite(0.5)));
        assert_eq!(result.artifact_stem(), "slln_Uniform");
    }
}
