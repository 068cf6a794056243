//! Artifact sinks: where finished results go.
//!
//! Computation and rendering are decoupled: an [`ArtifactSink`] only ever
//! sees a complete [`ExperimentResult`]. The crate ships a terminal summary
//! sink and a JSON export sink; figure renderers implement the same trait
//! externally.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty, JsonSink};
pub use terminal::{format_result, TerminalSink};

use crate::result::ExperimentResult;

/// Error returned when a sink fails to persist a result.
#[derive(Debug)]
pub enum SinkError {
    /// Filesystem failure (directory creation or file write).
    Io(std::io::Error),
    /// Result serialization failure.
    Serialization(serde_json::Error),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "artifact write failed: {err}"),
            Self::Serialization(err) => write!(f, "result serialization failed: {err}"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// Consumer of finished experiment results.
pub trait ArtifactSink {
    /// Render or persist one result.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] if the artifact cannot be produced; the sink
    /// must not leave a partially-written artifact behind.
    fn consume(&mut self, result: &ExperimentResult) -> Result<(), SinkError>;
}
