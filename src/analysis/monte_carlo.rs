//! Monte Carlo region-measure estimation.
//!
//! Samples the unit square uniformly, tests each point against an inclusion
//! predicate, and tracks the running estimate `scale * inside_i / i`. The
//! scale is the ratio of the sampling domain's measure to the known
//! subregion's measure, a configuration input rather than a constant; the default
//! quarter-circle region uses 4, which makes the estimate converge to pi.

use std::f64::consts::PI;

use rand::Rng;

use crate::error::SimError;
use crate::result::{AnalysisKind, ExperimentResult, Metadata, Reference};
use crate::sampling::SampleGenerator;

/// Monte Carlo estimator for the measure of a subregion of the unit square.
///
/// Generic over the inclusion predicate so that reproducibility depends only
/// on the generator seed, never on predicate-internal state.
#[derive(Debug, Clone)]
pub struct RegionEstimator<F> {
    predicate: F,
    scale: f64,
    reference: Option<f64>,
}

impl RegionEstimator<fn(f64, f64) -> bool> {
    /// The default region: the quarter disc `x² + y² ≤ 1`, scale 4.
    ///
    /// The running estimate converges to pi.
    pub fn quarter_circle() -> Self {
        Self {
            predicate: |x, y| x * x + y * y <= 1.0,
            scale: 4.0,
            reference: Some(PI),
        }
    }
}

impl<F: Fn(f64, f64) -> bool> RegionEstimator<F> {
    /// Estimator for a custom region.
    ///
    /// `scale` must be the measure of the sampling square divided by the
    /// measure against which the inside-fraction is interpreted (it bounds
    /// the running estimate: every element lies in `[0, scale]`).
    pub fn new(predicate: F, scale: f64) -> Self {
        Self {
            predicate,
            scale,
            reference: None,
        }
    }

    /// Attach the region's known true measure, for comparison by sinks.
    pub fn with_reference(mut self, value: f64) -> Self {
        self.reference = Some(value);
        self
    }

    /// Override the scale factor, keeping the predicate.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// The configured scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Run the estimator over `draw_count` uniform points.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::InvalidSampleSize`] for `draw_count == 0` and
    /// [`SimError::InvalidRegionScale`] for a non-finite or non-positive
    /// scale, before any entropy is consumed.
    pub fn estimate<R: Rng>(
        &self,
        generator: &mut SampleGenerator<R>,
        draw_count: usize,
    ) -> Result<MonteCarloAnalysis, SimError> {
        if draw_count == 0 {
            return Err(SimError::InvalidSampleSize);
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SimError::InvalidRegionScale(self.scale));
        }

        tracing::debug!(draw_count, scale = self.scale, "sampling unit square");

        let mut inside = 0usize;
        let mut estimates = Vec::with_capacity(draw_count);
        for i in 1..=draw_count {
            let (x, y) = generator.uniform_pair();
            if (self.predicate)(x, y) {
                inside += 1;
            }
            estimates.push(self.scale * inside as f64 / i as f64);
        }

        Ok(MonteCarloAnalysis {
            estimates,
            inside_count: inside,
            scale: self.scale,
            reference: self.reference,
        })
    }
}

/// Result of one Monte Carlo run: the running estimate sequence.
///
/// The estimator has variance proportional to 1/n; early prefixes can both
/// overshoot and undershoot the true measure.
#[derive(Debug, Clone, PartialEq)]
pub struct MonteCarloAnalysis {
    /// Running estimate indexed by draw count.
    pub estimates: Vec<f64>,
    /// Points that satisfied the predicate.
    pub inside_count: usize,
    /// Scale factor the estimates were multiplied by.
    pub scale: f64,
    /// Known true measure, when the region has one.
    pub reference: Option<f64>,
}

impl MonteCarloAnalysis {
    /// The estimate after all draws.
    pub fn final_estimate(&self) -> f64 {
        *self.estimates.last().expect("sequence is non-empty by construction")
    }

    /// Package for artifact sinks.
    ///
    /// The Monte Carlo sequence always samples the uniform law on the
    /// square, so the metadata names `Uniform` as its distribution.
    pub fn into_result(self) -> ExperimentResult {
        let reference = match self.reference {
            Some(value) => Reference::Value(value),
            None => Reference::Value(self.final_estimate()),
        };
        ExperimentResult {
            reference,
            metadata: Metadata {
                kind: AnalysisKind::MonteCarlo,
                distribution: "Uniform".to_string(),
                trial_size: None,
                trial_count: None,
                standardization: None,
                seed: None,
            },
            values: self.estimates,
        }
    }
}
