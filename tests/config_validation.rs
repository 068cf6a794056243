//! Tests for configuration and input validation.
//!
//! Every invalid input must be rejected at the API boundary, as a typed
//! error, before the analysis touches the random source.

use convergence_lab::{Config, Distribution, Experiment, SampleGenerator, SimError};

// =============================================================================
// DISTRIBUTION NAMES
// =============================================================================

#[test]
fn unknown_distribution_name_fails() {
    let err = "Unknown".parse::<Distribution>().unwrap_err();
    assert_eq!(err, SimError::UnknownDistribution("Unknown".to_string()));
}

#[test]
fn empty_distribution_name_fails() {
    assert!(matches!(
        "".parse::<Distribution>(),
        Err(SimError::UnknownDistribution(_))
    ));
}

#[test]
fn catalog_names_parse() {
    for name in ["Uniform", "Exponential", "Pareto_3", "Pareto_1.5", "Cauchy"] {
        assert!(name.parse::<Distribution>().is_ok(), "{name} should parse");
    }
}

// =============================================================================
// SAMPLE COUNT VALIDATION
// =============================================================================

#[test]
fn slln_zero_samples_fails() {
    let experiment = Experiment::new().sample_count(0).seed(1);
    let mut generator = experiment.generator();
    assert_eq!(
        experiment.slln(&mut generator).unwrap_err(),
        SimError::InvalidSampleSize
    );
}

#[test]
fn slln_one_sample_is_valid() {
    // Edge case: a single observation is a length-1 running mean.
    let experiment = Experiment::new().sample_count(1).seed(1);
    let mut generator = experiment.generator();
    let analysis = experiment.slln(&mut generator).unwrap();
    assert_eq!(analysis.running_mean.len(), 1);
}

#[test]
fn clt_zero_trial_size_fails() {
    let experiment = Experiment::new().trial_size(0).seed(1);
    let mut generator = experiment.generator();
    assert_eq!(
        experiment.clt(&mut generator).unwrap_err(),
        SimError::InvalidSampleSize
    );
}

#[test]
fn clt_zero_trial_count_fails() {
    let experiment = Experiment::new().trial_count(0).seed(1);
    let mut generator = experiment.generator();
    assert_eq!(
        experiment.clt(&mut generator).unwrap_err(),
        SimError::InvalidTrialCount
    );
}

#[test]
fn clt_single_trial_of_one_is_valid() {
    let experiment = Experiment::new().trial_size(1).trial_count(1).seed(1);
    let mut generator = experiment.generator();
    let analysis = experiment.clt(&mut generator).unwrap();
    assert_eq!(analysis.trial_count(), 1);
}

#[test]
fn monte_carlo_zero_draws_fails() {
    let experiment = Experiment::new().draw_count(0).seed(1);
    let mut generator = experiment.generator();
    assert_eq!(
        experiment.monte_carlo(&mut generator).unwrap_err(),
        SimError::InvalidSampleSize
    );
}

// =============================================================================
// WHOLE-CONFIG VALIDATION
// =============================================================================

#[test]
fn default_and_presets_validate() {
    assert!(Config::default().validate().is_ok());
    assert!(Config::quick().validate().is_ok());
    assert!(Config::thorough().validate().is_ok());
}

#[test]
fn validate_reports_first_violation() {
    let config = Config::default().sample_count(0).trial_count(0);
    assert_eq!(config.validate().unwrap_err(), SimError::InvalidSampleSize);
}

#[test]
fn validate_rejects_bad_region_scale() {
    for scale in [0.0, -4.0, f64::NAN, f64::INFINITY] {
        let config = Config::default().region_scale(scale);
        assert!(
            matches!(config.validate(), Err(SimError::InvalidRegionScale(_))),
            "scale {scale} should be rejected"
        );
    }
}

// =============================================================================
// FAILURE LEAVES NOTHING BEHIND
// =============================================================================

#[test]
fn failed_run_produces_no_result() {
    let experiment = Experiment::new().sample_count(0).seed(1);
    let mut generator = experiment.generator();
    let outcome = experiment.run(
        convergence_lab::AnalysisKind::Slln,
        &mut generator,
    );
    assert!(outcome.is_err());

    // The generator is untouched: a fresh one with the same seed produces
    // the same next draw.
    let mut fresh = SampleGenerator::seeded(1);
    let a = generator.draw(&Distribution::Uniform, 4).unwrap();
    let b = fresh.draw(&Distribution::Uniform, 4).unwrap();
    assert_eq!(a, b);
}
