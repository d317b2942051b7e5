//! Command-line configuration.
//!
//! ```text
//! chorder [--ts <3/4|4/4>] [--seed <N>] [--json] [--plan] [INPUT]...
//! ```
//!
//! Each INPUT is a chord symbol or a comma-separated progression.
//! Arguments are matched by hand; there are few enough that a parser
//! dependency would outweigh them.

use crate::rhythm::TimeSignature;
use crate::{Error, Result};

/// How compiled chords are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One aligned line per chord.
    #[default]
    Text,
    /// One JSON object per chord.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub time_signature: TimeSignature,
    /// Seed for measure planning. Unseeded runs differ each time.
    pub seed: Option<u64>,
    pub format: OutputFormat,
    /// Print a measure-rhythm plan before the chords.
    pub plan: bool,
    pub inputs: Vec<String>,
}

impl Config {
    /// Build a configuration from arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--ts" => {
                    let value = require_value(&mut args, "--ts")?;
                    config.time_signature = value.parse()?;
                }
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    config.seed = Some(value.parse().map_err(|_| {
                        Error::InvalidArgument(format!("--seed requires an unsigned integer, got '{value}'"))
                    })?);
                }
                "--json" => config.format = OutputFormat::Json,
                "--plan" => config.plan = true,
                flag if flag.starts_with("--") => {
                    return Err(Error::InvalidArgument(format!("unknown flag '{flag}'")));
                }
                input => config.inputs.push(input.to_string()),
            }
        }

        Ok(config)
    }

    /// Random source for planning, seeded when `--seed` was given.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

fn require_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::InvalidArgument(format!("{flag} requires a value")))
}
