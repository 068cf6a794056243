//! Experiment configuration.
//!
//! One flat configuration struct covers all three analyses; each analysis
//! reads only the fields it recognizes. Presets consolidate the parameter
//! sets the experiments are usually run with.

use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::error::SimError;

/// Configuration for an experiment run.
///
/// Validated before any sampling begins; see [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Law to draw observations from (SLLN and CLT modes).
    pub distribution: Distribution,

    // =========================================================================
    // SLLN mode
    // =========================================================================
    /// Length of the single SLLN sequence.
    pub sample_count: usize,

    // =========================================================================
    // CLT mode
    // =========================================================================
    /// Observations per trial.
    pub trial_size: usize,
    /// Number of independent trials.
    pub trial_count: usize,
    /// Standardize the trial sums when the moments allow it.
    pub standardize: bool,

    // =========================================================================
    // Monte Carlo mode
    // =========================================================================
    /// Number of uniform points to draw from the square.
    pub draw_count: usize,
    /// Ratio of the square's measure to the known subregion's measure.
    pub region_scale: f64,

    /// Deterministic seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            distribution: Distribution::Uniform,
            sample_count: 10_000,
            trial_size: 30,
            trial_count: 1_000,
            standardize: true,
            draw_count: 100_000,
            region_scale: 4.0,
            seed: None,
        }
    }
}

impl Config {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Small counts for rapid iteration.
    pub fn quick() -> Self {
        Self {
            sample_count: 2_000,
            trial_count: 500,
            draw_count: 10_000,
            ..Default::default()
        }
    }

    /// Generous counts for smooth figures.
    pub fn thorough() -> Self {
        Self {
            sample_count: 100_000,
            trial_count: 5_000,
            draw_count: 1_000_000,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the distribution.
    pub fn distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Set the SLLN sequence length.
    pub fn sample_count(mut self, n: usize) -> Self {
        self.sample_count = n;
        self
    }

    /// Set the CLT trial size.
    pub fn trial_size(mut self, n: usize) -> Self {
        self.trial_size = n;
        self
    }

    /// Set the CLT trial count.
    pub fn trial_count(mut self, m: usize) -> Self {
        self.trial_count = m;
        self
    }

    /// Request or decline standardization of the trial sums.
    pub fn standardize(mut self, on: bool) -> Self {
        self.standardize = on;
        self
    }

    /// Set the Monte Carlo draw count.
    pub fn draw_count(mut self, n: usize) -> Self {
        self.draw_count = n;
        self
    }

    /// Set the Monte Carlo region scale.
    pub fn region_scale(mut self, scale: f64) -> Self {
        self.region_scale = scale;
        self
    }

    /// Fix the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every field, regardless of which analysis will run.
    ///
    /// The analyzers additionally validate their own inputs at their API
    /// boundary; this whole-config check is for drivers that run the full
    /// suite from one configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`SimError`].
    pub fn validate(&self) -> Result<(), SimError> {
        if self.sample_count == 0 || self.trial_size == 0 || self.draw_count == 0 {
            return Err(SimError::InvalidSampleSize);
        }
        if self.trial_count == 0 {
            return Err(SimError::InvalidTrialCount);
        }
        if !self.region_scale.is_finite() || self.region_scale <= 0.0 {
            return Err(SimError::InvalidRegionScale(self.region_scale));
        }
        Ok(())
    }
}
