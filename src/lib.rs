//! # convergence-lab
//!
//! A simulation engine that demonstrates the convergence laws of probability
//! theory on synthetic samples:
//!
//! - **SLLN**: the running mean of i.i.d. draws converges to the theoretical
//!   mean (when one exists).
//! - **CLT**: standardized sums of finite-variance draws converge in
//!   distribution to the standard normal.
//! - **Monte Carlo**: the fraction of uniform points falling inside a region
//!   estimates the region's measure (pi, for the quarter circle).
//!
//! Sampling runs over a fixed catalog of laws (uniform, exponential, two
//! Pareto tails, Cauchy) with explicitly tagged theoretical moments, so the
//! heavy-tailed entries exercise the edge cases: no convergence target for
//! Cauchy, skipped standardization for infinite variance.
//!
//! ## Quick Start
//!
//! ```
//! use convergence_lab::{Distribution, Experiment};
//!
//! let experiment = Experiment::new()
//!     .distribution(Distribution::Uniform)
//!     .trial_size(30)
//!     .trial_count(1_000)
//!     .seed(42);
//!
//! let mut generator = experiment.generator();
//! let analysis = experiment.clt(&mut generator).unwrap();
//! assert!(analysis.standardization.applied());
//! assert!(analysis.empirical_mean().abs() < 0.2);
//! ```
//!
//! Results convert into [`ExperimentResult`] values that artifact sinks
//! (terminal summary, JSON export, external figure renderers) consume after
//! the computation has fully finished.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod engine;
mod error;
mod result;
mod sampling;

// Functional modules
pub mod analysis;
pub mod distribution;
pub mod output;

// Re-exports for public API
pub use analysis::{CltAnalysis, MonteCarloAnalysis, RegionEstimator, RunningMean, SllnAnalysis};
pub use config::Config;
pub use distribution::{Distribution, DistributionProvider, Moment, Moments};
pub use engine::Experiment;
pub use error::SimError;
pub use output::{ArtifactSink, JsonSink, SinkError, TerminalSink};
pub use result::{AnalysisKind, ExperimentResult, Metadata, Reference, Standardization};
pub use sampling::SampleGenerator;
