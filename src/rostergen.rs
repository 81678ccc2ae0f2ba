//! Demo roster generator.
//!
//! Writes a generated friend roster as JSON, for feeding `beacon-gui`
//! without an upstream service. Size and seed are configurable so large
//! grids and reproducible fixtures are both easy to produce.

use anyhow::{Context, Result, bail};
use beacon::{RosterReader, VirtualRosterReader, now_unix};
use std::env;

struct Config {
    count: usize,
    seed: u64,
    output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: 64,
            seed: 42,
            output_file: "roster.json".to_string(),
        }
    }
}

fn print_usage() {
    eprintln!("Usage: rostergen [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --count N      Number of friends to generate (default: 64)");
    eprintln!("  --seed N       RNG seed (default: 42)");
    eprintln!("  --output PATH  Output file (default: roster.json)");
    eprintln!("  --help         Show this help");
}

fn parse_args() -> Result<Option<Config>> {
    let mut config = Config::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--count" => {
                let value = args.next().context("--count requires a value")?;
                config.count = value.parse().context("--count must be a number")?;
            }
            "--seed" => {
                let value = args.next().context("--seed requires a value")?;
                config.seed = value.parse().context("--seed must be a number")?;
            }
            "--output" => {
                config.output_file = args.next().context("--output requires a value")?;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => {
                print_usage();
                bail!("unknown argument: {other}");
            }
        }
    }

    Ok(Some(config))
}

fn main() -> Result<()> {
    let Some(config) = parse_args()? else {
        return Ok(());
    };

    let reader = VirtualRosterReader::with_config(config.count, config.seed, now_unix());
    let roster = reader.read("")?;

    let json = serde_json::to_string_pretty(&roster)?;
    std::fs::write(&config.output_file, json)
        .with_context(|| format!("failed to write {}", config.output_file))?;

    let online = roster.friends.iter().filter(|f| !f.is_offline()).count();
    println!(
        "Wrote {} friends ({} online) to {} (seed {})",
        roster.friends.len(),
        online,
        config.output_file,
        config.seed
    );

    Ok(())
}
