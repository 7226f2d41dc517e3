// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! The generation count is a single value: it bounds the driver loop and
//! selects the pool reported at the end.
//!
//! ```text
//! staircase [-g|--generations N] [--keep-history] [-q|--quiet] [-h|--help]
//! ```
//!
//! `STAIRCASE_GENERATIONS` replaces the default count; `--generations`
//! overrides both.

use thiserror::Error;

use crate::engine::Retention;
use crate::geometry::{DEFAULT_GENERATIONS, GENERATIONS_ENV};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Last generation to compute.
    pub generations: usize,
    pub retention: Retention,
    /// Suppress per-generation progress lines.
    pub quiet: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            retention: Retention::default(),
            quiet: false,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(SearchConfig),
    Help,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    #[error("invalid generation count '{value}'")]
    InvalidGenerations { value: String },

    #[error("invalid {var} value '{value}'")]
    InvalidEnvironment { var: &'static str, value: String },

    #[error("unknown argument '{arg}'")]
    UnknownArgument { arg: String },
}

fn parse_generations(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

/// Parse command-line arguments (without the program name).
///
/// `env_generations` is the value of `STAIRCASE_GENERATIONS`, if set.
pub fn parse_args<I>(args: I, env_generations: Option<&str>) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = SearchConfig::default();
    if let Some(value) = env_generations {
        config.generations =
            parse_generations(value).ok_or_else(|| ConfigError::InvalidEnvironment {
                var: GENERATIONS_ENV,
                value: value.to_string(),
            })?;
    }

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-q" | "--quiet" => config.quiet = true,
            "--keep-history" => config.retention = Retention::Full,
            "-g" | "--generations" => {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue { flag: arg.clone() })?;
                config.generations = parse_generations(&value)
                    .ok_or(ConfigError::InvalidGenerations { value })?;
            }
            other => match other.strip_prefix("--generations=") {
                Some(value) => {
                    config.generations = parse_generations(value).ok_or_else(|| {
                        ConfigError::InvalidGenerations {
                            value: value.to_string(),
                        }
                    })?;
                }
                None => {
                    return Err(ConfigError::UnknownArgument {
                        arg: other.to_string(),
                    })
                }
            },
        }
    }
    Ok(Command::Run(config))
}

pub const USAGE: &str = "\
Usage: staircase [OPTIONS]

Enumerate extremal staircases generation by generation. Each staircase that
stays extremal is printed to stdout as its 0/1 signature followed by '+';
progress lines go to stderr.

Options:
  -g, --generations N   last generation to compute (default 60,
                        or $STAIRCASE_GENERATIONS)
      --keep-history    keep every generation's pool in memory
  -q, --quiet           no per-generation progress lines
  -h, --help            show this message
";
