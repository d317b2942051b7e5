// CLI entry point for chorder.
//
// Compiles chord symbols and comma-separated progressions given on the
// command line and prints their pitch content. Malformed symbols are
// logged and skipped; the rest of the input is still processed.
//
// Usage:
//   chorder [OPTIONS] [INPUT]...
//     --ts <3/4|4/4>   Time signature for --plan (default: 4/4)
//     --seed <N>       Seed for --plan
//     --json           Print one JSON object per chord
//     --plan           Print a measure-rhythm plan first
//
// Log level follows RUST_LOG (default: chorder=info).

use std::io::Write;

use chorder::progression::SEPARATOR;
use chorder::rhythm::{chords_needed, plan_measures};
use chorder::{Config, OutputFormat, Progression};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: chorder [--ts <3/4|4/4>] [--seed <N>] [--json] [--plan] [INPUT]...";

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chorder=info")),
        )
        .init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if config.inputs.is_empty() && !config.plan {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> chorder::Result<()> {
    let mut out = std::io::stdout().lock();

    if config.plan {
        let plan = plan_measures(config.time_signature, &mut config.rng());
        writeln!(
            out,
            "plan: {} measures of {}, {} chords",
            plan.len(),
            config.time_signature,
            chords_needed(&plan)
        )?;
        for (i, measure) in plan.iter().enumerate() {
            writeln!(out, "  measure {}: beats {:?}", i + 1, measure.beats_with_chords)?;
        }
    }

    for input in &config.inputs {
        let mut progression = Progression::new();
        let mut skipped = 0usize;

        for symbol in input.split(SEPARATOR) {
            let chord = match chorder::compile(symbol) {
                Ok(chord) => chord,
                Err(e) => {
                    tracing::warn!(symbol, error = %e, "skipping chord symbol");
                    skipped += 1;
                    continue;
                }
            };
            let notes = chord.notes();

            match config.format {
                OutputFormat::Text => writeln!(
                    out,
                    "{symbol:<8} {chord:<8} {mode:<11} {notes:?}",
                    chord = chord.to_string(),
                    mode = chord.mode.name(),
                    notes = notes.as_slice(),
                )?,
                OutputFormat::Json => {
                    let line = serde_json::json!({
                        "symbol": symbol,
                        "chord": chord,
                        "notes": notes,
                    });
                    writeln!(out, "{line}")?;
                }
            }
            progression.push(chord)?;
        }

        if input.contains(SEPARATOR) && config.format == OutputFormat::Text {
            writeln!(out, "cp={progression}")?;
        }
        if skipped > 0 {
            tracing::info!(input = input.as_str(), skipped, kept = progression.len(), "finished input");
        }
    }

    Ok(())
}
