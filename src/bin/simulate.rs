//! CLI driver for the convergence experiments.
//!
//! # Usage
//!
//! ```bash
//! # Running mean of 10k uniform draws against the theoretical mean
//! cargo run --bin simulate -- slln --distribution Uniform -n 10000
//!
//! # CLT sweep over trial sizes for a heavy tail, JSON artifacts included
//! cargo run --bin simulate -- --json clt --distribution Pareto_1.5
//!
//! # Monte Carlo estimate of pi from one million points
//! cargo run --bin simulate -- monte-carlo -n 1000000
//!
//! # Full catalog sweep with the thorough preset
//! cargo run --bin simulate -- --seed 42 suite --preset thorough
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::Rng;

use convergence_lab::{
    AnalysisKind, ArtifactSink, Config, Distribution, DistributionProvider, Experiment, JsonSink,
    Moment, Moments, SampleGenerator, TerminalSink,
};

/// Convergence-law experiment runner
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Run SLLN, CLT and Monte Carlo convergence experiments")]
#[command(version)]
struct Cli {
    /// Deterministic seed (omit for OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output directory for JSON artifacts
    #[arg(short, long, global = true, default_value = "results/data")]
    output: PathBuf,

    /// Write a JSON artifact per result in addition to the terminal summary
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Running cumulative mean of one growing sequence
    Slln {
        /// Catalog name, or "die" for the fair six-sided die demo
        #[arg(short, long, default_value = "Uniform")]
        distribution: String,

        /// Sequence length
        #[arg(short = 'n', long, default_value_t = 10_000)]
        samples: usize,
    },

    /// Trial sums for a sweep of trial sizes
    Clt {
        /// Catalog name
        #[arg(short, long, default_value = "Uniform")]
        distribution: String,

        /// Comma-separated trial sizes to sweep
        #[arg(long, default_value = "2,5,10,30,50,100")]
        trial_sizes: String,

        /// Trials per size
        #[arg(short = 'm', long, default_value_t = 1_000)]
        trials: usize,

        /// Keep raw sums instead of standardizing
        #[arg(long)]
        raw: bool,
    },

    /// Monte Carlo estimate of pi from the quarter circle
    MonteCarlo {
        /// Number of uniform points
        #[arg(short = 'n', long, default_value_t = 100_000)]
        draws: usize,
    },

    /// Every catalog law through SLLN and the CLT sweep, plus the pi estimate
    Suite {
        /// Preset: quick, default or thorough
        #[arg(long, default_value = "default")]
        preset: String,
    },
}

/// Fair six-sided die: the classic SLLN demonstration.
///
/// Not part of the catalog; shows how a custom provider plugs into the same
/// analyses.
struct FairDie;

impl DistributionProvider for FairDie {
    fn name(&self) -> &str {
        "Die"
    }

    fn moments(&self) -> Moments {
        Moments {
            mean: Moment::Finite(3.5),
            variance: Moment::Finite(35.0 / 12.0),
        }
    }

    fn sample_one<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(1..=6) as f64
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut generator = match cli.seed {
        Some(seed) => SampleGenerator::seeded(seed),
        None => SampleGenerator::from_entropy(),
    };

    match &cli.command {
        Command::Slln {
            distribution,
            samples,
        } => {
            let mut result = if distribution.eq_ignore_ascii_case("die") {
                convergence_lab::analysis::slln::analyze(&FairDie, &mut generator, *samples)?
                    .into_result()
            } else {
                let dist = Distribution::from_str(distribution)?;
                let experiment = base_experiment(cli)
                    .distribution(dist)
                    .sample_count(*samples);
                experiment.slln(&mut generator)?.into_result()
            };
            result.metadata.seed = cli.seed;
            emit(cli, &result)?;
        }

        Command::Clt {
            distribution,
            trial_sizes,
            trials,
            raw,
        } => {
            let dist = Distribution::from_str(distribution)?;
            for n in parse_sizes(trial_sizes)? {
                let experiment = base_experiment(cli)
                    .distribution(dist)
                    .trial_size(n)
                    .trial_count(*trials)
                    .standardize(!raw);
                let result = experiment.run(AnalysisKind::Clt, &mut generator)?;
                emit(cli, &result)?;
            }
        }

        Command::MonteCarlo { draws } => {
            let experiment = base_experiment(cli).draw_count(*draws);
            let result = experiment.run(AnalysisKind::MonteCarlo, &mut generator)?;
            emit(cli, &result)?;
        }

        Command::Suite { preset } => {
            let config = preset_config(preset)?;
            run_suite(cli, &config, &mut generator)?;
        }
    }

    Ok(())
}

/// Full sweep: SLLN and the CLT trial-size ladder for every catalog law,
/// then the pi estimate.
fn run_suite<R: Rng>(
    cli: &Cli,
    config: &Config,
    generator: &mut SampleGenerator<R>,
) -> Result<(), Box<dyn Error>> {
    config.validate()?;

    for dist in Distribution::CATALOG {
        let experiment = Experiment::with_config(config.clone().distribution(dist));
        let mut result = experiment.slln(generator)?.into_result();
        result.metadata.seed = cli.seed;
        emit(cli, &result)?;

        for n in [2, 5, 10, 30, 50, 100] {
            let experiment =
                Experiment::with_config(config.clone().distribution(dist).trial_size(n));
            let mut result = experiment.clt(generator)?.into_result();
            result.metadata.seed = cli.seed;
            emit(cli, &result)?;
        }

        println!("{}", format!("{dist} done.").dimmed());
    }

    let experiment = Experiment::with_config(config.clone());
    let mut result = experiment.monte_carlo(generator)?.into_result();
    result.metadata.seed = cli.seed;
    emit(cli, &result)?;

    Ok(())
}

fn base_experiment(cli: &Cli) -> Experiment {
    let mut experiment = Experiment::new();
    if let Some(seed) = cli.seed {
        experiment = experiment.seed(seed);
    }
    experiment
}

fn preset_config(name: &str) -> Result<Config, String> {
    match name {
        "quick" => Ok(Config::quick()),
        "default" => Ok(Config::default()),
        "thorough" => Ok(Config::thorough()),
        other => Err(format!("unknown preset {other:?} (expected quick, default or thorough)")),
    }
}

fn parse_sizes(input: &str) -> Result<Vec<usize>, String> {
    input.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid trial size {part:?}"))
        })
        .collect()
}

fn emit(cli: &Cli, result: &convergence_lab::ExperimentResult) -> Result<(), Box<dyn Error>> {
    TerminalSink.consume(result)?;
    if cli.json {
        let mut sink = JsonSink::new(&cli.output).pretty();
        sink.consume(result)?;
        println!(
            "{}",
            format!("wrote {}", sink.path_for(result).display()).dimmed()
        );
    }
    Ok(())
}
