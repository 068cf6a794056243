//! The probability-law catalog and the provider abstraction.
//!
//! Each catalog entry supplies i.i.d. draws plus its theoretical first and
//! second moments. Moments are tagged values ([`Moment`]), never sentinel
//! floats: standardization logic downstream pattern-matches on them and can
//! never accidentally do arithmetic on "undefined".

use std::str::FromStr;

use rand::Rng;
use rand_distr::{Cauchy, Distribution as Sample, Exp1, Pareto};
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A theoretical moment of a probability law.
///
/// Heavy-tailed laws make the usual `f64` conventions ambiguous: `NaN` could
/// mean "undefined" or a computation bug, and `f64::INFINITY` silently
/// poisons arithmetic. The tagged representation keeps the three cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Moment {
    /// The moment exists and is finite.
    Finite(f64),
    /// The moment diverges (e.g. the variance of Pareto with shape 1.5).
    Infinite,
    /// The moment does not exist (e.g. the mean of the Cauchy law).
    Undefined,
}

impl Moment {
    /// Return the finite value, if there is one.
    pub fn finite(self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(v),
            Self::Infinite | Self::Undefined => None,
        }
    }

    /// Whether this moment is a finite number.
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl std::fmt::Display for Moment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v}"),
            Self::Infinite => write!(f, "infinite"),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}

/// Theoretical mean and variance of a law.
///
/// Catalog invariant: either both moments are finite, both are undefined
/// (Cauchy), or the mean is finite with infinite variance (Pareto 1.5).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    /// Theoretical mean.
    pub mean: Moment,
    /// Theoretical variance.
    pub variance: Moment,
}

/// A source of i.i.d. random draws with known theoretical moments.
///
/// The closed [`Distribution`] catalog implements this; experiment drivers
/// and tests may implement it for additional laws without touching the
/// catalog (the analyzers are generic over the provider).
pub trait DistributionProvider {
    /// Human-readable law name, used in result metadata and artifact stems.
    fn name(&self) -> &str;

    /// Theoretical mean and variance.
    fn moments(&self) -> Moments;

    /// Draw a single observation.
    fn sample_one<R: Rng>(&self, rng: &mut R) -> f64;

    /// Draw `count` i.i.d. observations.
    ///
    /// # Errors
    ///
    /// Fails with [`SimError::InvalidSampleSize`] for `count == 0`, before
    /// consuming any entropy.
    fn draw<R: Rng>(&self, rng: &mut R, count: usize) -> Result<Vec<f64>, SimError> {
        if count == 0 {
            return Err(SimError::InvalidSampleSize);
        }
        Ok((0..count).map(|_| self.sample_one(rng)).collect())
    }
}

/// The fixed catalog of probability laws.
///
/// The shifted Pareto entries match `Pareto(a) + 1` over a Lomax generator,
/// which is exactly the classic Pareto law with scale 1, so they sample
/// directly from [`rand_distr::Pareto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distribution {
    /// U(0, 1).
    Uniform,
    /// Exp(rate = 1).
    Exponential,
    /// Pareto(scale = 1, shape = 3).
    Pareto3,
    /// Pareto(scale = 1, shape = 1.5). Finite mean, infinite variance.
    Pareto15,
    /// Standard Cauchy. Undefined mean and variance.
    Cauchy,
}

impl Distribution {
    /// Every catalog entry, in canonical order.
    pub const CATALOG: [Distribution; 5] = [
        Self::Uniform,
        Self::Exponential,
        Self::Pareto3,
        Self::Pareto15,
        Self::Cauchy,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uniform => "Uniform",
            Self::Exponential => "Exponential",
            Self::Pareto3 => "Pareto_3",
            Self::Pareto15 => "Pareto_1.5",
            Self::Cauchy => "Cauchy",
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CATALOG
            .iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| SimError::UnknownDistribution(s.to_string()))
    }
}

impl DistributionProvider for Distribution {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn moments(&self) -> Moments {
        match self {
            // U(0,1): mean 1/2, variance 1/12.
            Self::Uniform => Moments {
                mean: Moment::Finite(0.5),
                variance: Moment::Finite(1.0 / 12.0),
            },
            // Exp(1): mean and variance both 1.
            Self::Exponential => Moments {
                mean: Moment::Finite(1.0),
                variance: Moment::Finite(1.0),
            },
            // Pareto(1, a): mean a/(a-1), variance a/((a-1)^2 (a-2)).
            Self::Pareto3 => Moments {
                mean: Moment::Finite(1.5),
                variance: Moment::Finite(0.75),
            },
            Self::Pareto15 => Moments {
                mean: Moment::Finite(3.0),
                variance: Moment::Infinite,
            },
            Self::Cauchy => Moments {
                mean: Moment::Undefined,
                variance: Moment::Undefined,
            },
        }
    }

    fn sample_one<R: Rng>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Uniform => rng.random(),
            Self::Exponential => Exp1.sample(rng),
            Self::Pareto3 => pareto(3.0).sample(rng),
            Self::Pareto15 => pareto(1.5).sample(rng),
            Self::Cauchy => standard_cauchy().sample(rng),
        }
    }

    fn draw<R: Rng>(&self, rng: &mut R, count: usize) -> Result<Vec<f64>, SimError> {
        if count == 0 {
            return Err(SimError::InvalidSampleSize);
        }
        let mut values = Vec::with_capacity(count);
        // Build the sampler once per draw, not once per observation.
        match self {
            Self::Uniform => values.extend((0..count).map(|_| rng.random::<f64>())),
            Self::Exponential => values.extend((0..count).map(|_| -> f64 { Exp1.sample(rng) })),
            Self::Pareto3 => {
                let law = pareto(3.0);
                values.extend((0..count).map(|_| law.sample(rng)));
            }
            Self::Pareto15 => {
                let law = pareto(1.5);
                values.extend((0..count).map(|_| law.sample(rng)));
            }
            Self::Cauchy => {
                let law = standard_cauchy();
                values.extend((0..count).map(|_| law.sample(rng)));
            }
        }
        Ok(values)
    }
}

fn pareto(shape: f64) -> Pareto<f64> {
    debug_assert!(shape > 0.0);
    Pareto::new(1.0, shape).expect("catalog shape is positive")
}

fn standard_cauchy() -> Cauchy<f64> {
    Cauchy::new(0.0, 1.0).expect("unit scale is positive")
}
