//! Squared CLI - squares each value given on the command line through the
//! exported `squared_` routine.

use anyhow::{Context, Result};
use clap::Parser;
use squared::{Config, Operand, OutputFormat, SquareReport};
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "squared")]
#[command(about = "Square double-precision values via the squared_ C routine", long_about = None)]
#[command(version)]
struct Cli {
    /// Values to square
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,

    /// Print one JSON object per value
    #[arg(long, overrides_with = "plain")]
    json: bool,

    /// Print `x^2 = y` lines (overrides SQUARED_OUTPUT)
    #[arg(long, overrides_with = "json")]
    plain: bool,

    /// Reject NaN and infinite values
    #[arg(long, overrides_with = "no_strict")]
    strict: bool,

    /// Accept NaN and infinite values (overrides SQUARED_STRICT)
    #[arg(long, overrides_with = "strict")]
    no_strict: bool,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if cli.json {
        config.output = OutputFormat::Json;
    } else if cli.plain {
        config.output = OutputFormat::Plain;
    }
    if cli.strict {
        config.strict = true;
    } else if cli.no_strict {
        config.strict = false;
    }

    // Priority: RUST_LOG env var > verbose flag > SQUARED_LOG_LEVEL
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new(&config.log_level),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // stderr only, stdout carries the results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        output = %config.output,
        strict = config.strict,
        count = cli.values.len(),
        "Squaring values"
    );

    let operands = cli
        .values
        .iter()
        .map(|raw| {
            Operand::parse(raw, config.strict)
                .with_context(|| format!("Invalid operand {:?}", raw))
        })
        .collect::<Result<Vec<_>>>()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for operand in operands {
        let report = SquareReport::from_operand(operand);
        debug!(input = %report.input, output = report.output, "Squared");
        match config.output {
            OutputFormat::Plain => writeln!(out, "{}", report)?,
            OutputFormat::Json => {
                let line = serde_json::to_string(&report).context("Failed to encode report")?;
                writeln!(out, "{}", line)?;
            }
        }
    }

    Ok(())
}
