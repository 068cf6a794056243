//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::analysis::{sample_mean, sample_variance};
use crate::distribution::Moment;
use crate::output::{ArtifactSink, SinkError};
use crate::result::{AnalysisKind, ExperimentResult, Reference, Standardization};

/// Sink that prints a colored summary box to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSink;

impl ArtifactSink for TerminalSink {
    fn consume(&mut self, result: &ExperimentResult) -> Result<(), SinkError> {
        println!("{}", format_result(result));
        Ok(())
    }
}

/// Format an ExperimentResult for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing for clear presentation.
pub fn format_result(result: &ExperimentResult) -> String {
    let mut output = String::new();

    let header = match result.metadata.kind {
        AnalysisKind::Slln => "SLLN CONVERGENCE".bold().to_string(),
        AnalysisKind::Clt => "CLT SAMPLING DISTRIBUTION".bold().to_string(),
        AnalysisKind::MonteCarlo => "MONTE CARLO ESTIMATE".bold().to_string(),
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    output.push_str(&format_box_line(&format!(
        "Distribution: {}",
        result.metadata.distribution
    )));

    match result.metadata.kind {
        AnalysisKind::Slln => format_slln(result, &mut output),
        AnalysisKind::Clt => format_clt(result, &mut output),
        AnalysisKind::MonteCarlo => format_monte_carlo(result, &mut output),
    }

    if let Some(seed) = result.metadata.seed {
        output.push_str(&format_box_line(&format!("Seed: {seed}").dimmed().to_string()));
    }

    output.push_str(&format_box_bottom());
    output
}

fn format_slln(result: &ExperimentResult, output: &mut String) {
    output.push_str(&format_box_line(&format!("Samples: {}", result.values.len())));

    let final_mean = result.final_value().unwrap_or(0.0);
    output.push_str(&format_box_line(&format!("Final mean: {final_mean:.6}")));

    match result.reference {
        Reference::Mean(Moment::Finite(target)) => {
            let delta = (final_mean - target).abs();
            let line = format!("Target: {target} (|delta| = {delta:.6})");
            let colored_line = if delta < 0.05 { line.green() } else { line.yellow() };
            output.push_str(&format_box_line(&colored_line.to_string()));
        }
        Reference::Mean(moment) => {
            output.push_str(&format_box_line(
                &format!("Target: {moment} (no convergence target)")
                    .yellow()
                    .to_string(),
            ));
        }
        _ => {}
    }
}

fn format_clt(result: &ExperimentResult, output: &mut String) {
    if let Some(n) = result.metadata.trial_size {
        output.push_str(&format_box_line(&format!("Trial size: {n}")));
    }
    output.push_str(&format_box_line(&format!("Trials: {}", result.values.len())));

    match result.metadata.standardization {
        Some(Standardization::Applied) => {
            output.push_str(&format_box_line(&"Standardized: yes".green().to_string()));
        }
        Some(Standardization::NotRequested) => {
            output.push_str(&format_box_line("Standardized: not requested"));
        }
        Some(Standardization::Skipped { mean, variance }) => {
            output.push_str(&format_box_line(
                &format!("Standardized: skipped (mean {mean}, variance {variance})")
                    .yellow()
                    .to_string(),
            ));
        }
        None => {}
    }

    let mean = sample_mean(&result.values);
    let variance = sample_variance(&result.values);
    output.push_str(&format_box_line(&format!(
        "Empirical mean {mean:.4}, variance {variance:.4}"
    )));
}

fn format_monte_carlo(result: &ExperimentResult, output: &mut String) {
    output.push_str(&format_box_line(&format!("Draws: {}", result.values.len())));

    let final_estimate = result.final_value().unwrap_or(0.0);
    output.push_str(&format_box_line(&format!("Final estimate: {final_estimate:.6}")));

    if let Reference::Value(target) = result.reference {
        let delta = (final_estimate - target).abs();
        let line = format!("Reference: {target:.6} (|delta| = {delta:.6})");
        let colored_line = if delta < 0.01 { line.green() } else { line.yellow() };
        output.push_str(&format_box_line(&colored_line.to_string()));
    }
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Metadata;

    fn slln_result() -> ExperimentResult {
        ExperimentResult {
            values: vec![0.7, 0.55, 0.51],
            reference: Reference::Mean(Moment::Finite(0.5)),
            metadata: Metadata {
                kind: AnalysisKind::Slln,
                distribution: "Uniform".to_string(),
                trial_size: None,
                trial_count: None,
                standardization: None,
                seed: Some(42),
            },
        }
    }

    #[test]
    fn test_format_slln_result() {
        let output = format_result(&slln_result());
        assert!(output.contains("SLLN CONVERGENCE"));
        assert!(output.contains("Uniform"));
        assert!(output.contains("0.510000"));
        assert!(output.contains("Seed: 42"));
    }

    #[test]
    fn test_format_clt_skip_is_visible() {
        let result = ExperimentResult {
            values: vec![31.0, 33.5],
            reference: Reference::StandardNormal,
            metadata: Metadata {
                kind: AnalysisKind::Clt,
                distribution: "Pareto_1.5".to_string(),
                trial_size: Some(10),
                trial_count: Some(2),
                standardization: Some(Standardization::Skipped {
                    mean: Moment::Finite(3.0),
                    variance: Moment::Infinite,
                }),
                seed: None,
            },
        };
        let output = format_result(&result);
        assert!(output.contains("skipped"));
        assert!(output.contains("infinite"));
    }

    #[test]
    fn test_format_monte_carlo_reference_delta() {
        let result = ExperimentResult {
            values: vec![4.0, 3.2, 3.14],
            reference: Reference::Value(std::f64::consts::PI),
            metadata: Metadata {
                kind: AnalysisKind::MonteCarlo,
                distribution: "Uniform".to_string(),
                trial_size: None,
                trial_count: None,
                standardization: None,
                seed: None,
            },
        };
        let output = format_result(&result);
        assert!(output.contains("MONTE CARLO"));
        assert!(output.contains("3.141593"));
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = "\x1b[32mgreen\x1b[0m";
        assert_eq!(strip_ansi_codes(colored), "green");
    }
}
