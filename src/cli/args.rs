use std::{path::PathBuf, time::Duration};

use clap::Parser;

use otter_pup::{config::Config, types::err::ConfigError};

/// Determines whether a formula is satisfiable or unsatisfiable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS form CNF file to parse
    pub formula_file: PathBuf,

    /// Display a satisfying valuation, if possible
    #[arg(short, long, default_value_t = false)]
    pub model: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,

    /// Write a satisfying valuation to the given file, one literal per line
    #[arg(long)]
    pub solution: Option<PathBuf>,

    /// Forbid restarts
    #[arg(long = "no-restart", default_value_t = false)]
    pub no_restart: bool,

    /// The probability of a restart after the first conflict
    #[arg(short = 'r', long, default_value_t = 0.9)]
    pub restart_probability: f64,

    /// The seed for the source of randomness
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Time limit for the solve, in seconds
    #[arg(short, long, value_parser = |seconds: &str| seconds.parse().map(Duration::from_secs))]
    pub time_limit: Option<Duration>,

    /// Display the progress of a solve
    #[arg(short, long, default_value_t = false)]
    pub progress: bool,
}

impl Args {
    /// A configuration with the values given by the arguments.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        config.restart.value = !self.no_restart;
        config.restart_probability.set(self.restart_probability)?;
        config.seed.set(self.seed)?;
        config.time_limit = self.time_limit;

        Ok(config)
    }
}
