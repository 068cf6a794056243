//! JSON serialization and export for experiment results.

use std::fs;
use std::path::{Path, PathBuf};

use crate::output::{ArtifactSink, SinkError};
use crate::result::ExperimentResult;

/// Serialize an ExperimentResult to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// ExperimentResult).
pub fn to_json(result: &ExperimentResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize an ExperimentResult to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// ExperimentResult).
pub fn to_json_pretty(result: &ExperimentResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Sink that writes one `<stem>.json` file per result.
///
/// The output directory is created before the first write. The result is
/// serialized to memory first and written in one call, so a failed
/// invocation leaves no partial artifact behind.
#[derive(Debug, Clone)]
pub struct JsonSink {
    dir: PathBuf,
    pretty: bool,
}

impl JsonSink {
    /// Sink writing compact JSON into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pretty: false,
        }
    }

    /// Switch to pretty-printed output.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Directory this sink writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the given result would be written to.
    pub fn path_for(&self, result: &ExperimentResult) -> PathBuf {
        self.dir.join(format!("{}.json", result.artifact_stem()))
    }
}

impl ArtifactSink for JsonSink {
    fn consume(&mut self, result: &ExperimentResult) -> Result<(), SinkError> {
        let body = if self.pretty {
            to_json_pretty(result)?
        } else {
            to_json(result)?
        };
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(result);
        fs::write(&path, body)?;
        tracing::debug!(path = %path.display(), "wrote artifact");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::Moment;
    use crate::result::{AnalysisKind, Metadata, Reference};

    fn make_result() -> ExperimentResult {
        ExperimentResult {
            values: vec![0.4, 0.45, 0.5],
            reference: Reference::Mean(Moment::Finite(0.5)),
            metadata: Metadata {
                kind: AnalysisKind::Slln,
                distribution: "Uniform".to_string(),
                trial_size: None,
                trial_count: None,
                standardization: None,
                seed: Some(7),
            },
        }
    }

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "convergence-lab-{tag}-{}",
            std::process::id()
        ))
    }

    #[test]
    fn test_to_json_round_trips() {
        let result = make_result();
        let json = to_json(&result).unwrap();
        let back: ExperimentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_sink_creates_directory_and_file() {
        let dir = temp_dir("sink");
        let _ = fs::remove_dir_all(&dir);

        let mut sink = JsonSink::new(&dir);
        let result = make_result();
        sink.consume(&result).unwrap();

        let path = sink.path_for(&result);
        assert!(path.ends_with("slln_Uniform.json"));
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("Uniform"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let dir = temp_dir("pretty");
        let _ = fs::remove_dir_all(&dir);

        let mut sink = JsonSink::new(&dir).pretty();
        let result = make_result();
        sink.consume(&result).unwrap();

        let body = fs::read_to_string(sink.path_for(&result)).unwrap();
        assert!(body.lines().count() > 1);

        fs::remove_dir_all(&dir).unwrap();
    }
}
