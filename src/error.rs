//! Error types for experiment configuration and sampling.

/// Error returned when an experiment is misconfigured.
///
/// All variants are detected at the API boundary, before any entropy is
/// consumed: a failed invocation produces no partial result and no output
/// artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// The requested distribution name is not in the catalog.
    ///
    /// The catalog is closed; see [`crate::Distribution::CATALOG`] for the
    /// recognized names. Custom laws plug in through the
    /// [`crate::DistributionProvider`] trait instead.
    UnknownDistribution(String),

    /// A sample or draw count of zero was requested.
    ///
    /// Every analysis needs at least one observation; a zero-length draw has
    /// no defined running statistic.
    InvalidSampleSize,

    /// A trial count of zero was requested (CLT mode).
    InvalidTrialCount,

    /// The Monte Carlo region scale is not a finite positive number.
    ///
    /// The scale is the ratio of the sampling domain's measure to the known
    /// subregion's measure (4.0 for the quarter circle in the unit square).
    InvalidRegionScale(f64),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDistribution(name) => {
                write!(f, "unknown distribution {name:?} (expected one of: Uniform, Exponential, Pareto_3, Pareto_1.5, Cauchy)")
            }
            Self::InvalidSampleSize => write!(f, "sample size must be at least 1"),
            Self::InvalidTrialCount => write!(f, "trial count must be at least 1"),
            Self::InvalidRegionScale(scale) => {
                write!(f, "region scale must be finite and positive, got {scale}")
            }
        }
    }
}

impl std::error::Error for SimError {}
