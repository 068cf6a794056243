//! Experiment results handed to artifact sinks.
//!
//! An [`ExperimentResult`] is produced once per analysis invocation and is
//! immutable afterwards: the ordered value sequence, the reference the
//! rendering collaborator should compare against, and enough metadata to
//! name the artifact.

use serde::{Deserialize, Serialize};

use crate::distribution::Moment;

/// Which analysis produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisKind {
    /// Running cumulative mean of a single sequence.
    Slln,
    /// Collection of (optionally standardized) trial sums.
    Clt,
    /// Running Monte Carlo region-measure estimate.
    MonteCarlo,
}

impl AnalysisKind {
    /// Stable lowercase tag used in artifact names and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slln => "slln",
            Self::Clt => "clt",
            Self::MonteCarlo => "monte_carlo",
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a rendering sink should draw alongside the value sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Reference {
    /// A horizontal line at the theoretical mean (SLLN). May be undefined,
    /// in which case there is no convergence target to draw.
    Mean(Moment),
    /// The standard normal density / quantiles (CLT).
    StandardNormal,
    /// A known reference value (Monte Carlo; pi for the quarter circle).
    Value(f64),
}

/// Outcome of the CLT standardization step.
///
/// Standardization is skipped (never silently approximated) when the law's
/// moments are not both finite. The skip is part of the result so callers
/// and exported artifacts can see which scale the values are on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Standardization {
    /// Sums were transformed to zero mean, unit variance.
    Applied,
    /// The caller asked for raw sums.
    NotRequested,
    /// Standardization was requested but the moments do not support it.
    Skipped {
        /// The theoretical mean at the time of the decision.
        mean: Moment,
        /// The theoretical variance at the time of the decision.
        variance: Moment,
    },
}

impl Standardization {
    /// Whether the values are on the standardized scale.
    pub fn applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Whether a requested standardization had to be skipped.
    pub fn skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Identifying metadata carried alongside a result sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Analysis that produced the result.
    pub kind: AnalysisKind,
    /// Law the observations were drawn from.
    pub distribution: String,
    /// Per-trial draw count (CLT only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_size: Option<usize>,
    /// Number of trials (CLT only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_count: Option<usize>,
    /// Standardization outcome (CLT only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standardization: Option<Standardization>,
    /// Seed the experiment ran under, when fixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Metadata {
    /// Artifact stem: `<analysis>_<distribution>[_n<trialsize>]`.
    ///
    /// Sinks derive file names from this; a figure sink would emit
    /// `results/figures/<stem>.png`.
    pub fn artifact_stem(&self) -> String {
        match self.trial_size {
            Some(n) => format!("{}_{}_n{}", self.kind, self.distribution, n),
            None => format!("{}_{}", self.kind, self.distribution),
        }
    }
}

/// One finished analysis: the value sequence plus its reference and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// The ordered result sequence: running means (SLLN), trial sums (CLT),
    /// or running estimates (Monte Carlo).
    pub values: Vec<f64>,
    /// What to compare the sequence against.
    pub reference: Reference,
    /// Identity and parameters of the producing analysis.
    pub metadata: Metadata,
}

impl ExperimentResult {
    /// The last element of the sequence, if any.
    pub fn final_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Artifact stem for sinks; see [`Metadata::artifact_stem`].
    pub fn artifact_stem(&self) -> String {
        self.metadata.artifact_stem()
    }
}
