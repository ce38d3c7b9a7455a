//! filterql CLI
//!
//! Parses filter text in a chosen dialect and prints the resulting structure.

mod error;
mod render;

use std::io::{self, Read};

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use filterql_core::parser::DEFAULT_MAX_DEPTH;

use crate::error::CliError;
use crate::render::{render, DialectChoice, OutputFormat};

/// Highest accepted `--max-depth`; group parsing recurses once per level.
const MAX_DEPTH_CEILING: u64 = 256;

/// Parse SQL-like filter text into a backend-neutral structure.
#[derive(Parser)]
#[command(name = "filterql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Grammar to parse the input with.
    #[arg(short, long, env = "FILTERQL_DIALECT", value_enum, default_value_t = DialectChoice::Expression)]
    dialect: DialectChoice,

    /// Output format.
    #[arg(short, long, env = "FILTERQL_FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Reject inputs larger than this many bytes.
    #[arg(long, env = "FILTERQL_MAX_INPUT_BYTES", default_value_t = 64 * 1024)]
    max_input_bytes: usize,

    /// Maximum nesting of parenthesized groups.
    #[arg(
        long,
        env = "FILTERQL_MAX_DEPTH",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DEPTH_CEILING)
    )]
    max_depth: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Filter text, or `-` to read it from stdin.
    input: String,
}

fn read_input(input: &str, limit: usize) -> Result<String, CliError> {
    let text = if input == "-" {
        let mut buf = String::new();
        // One byte past the limit is enough to tell that it was exceeded.
        io::stdin()
            .lock()
            .take(u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1))
            .read_to_string(&mut buf)?;
        buf
    } else {
        input.to_string()
    };
    if text.len() > limit {
        return Err(CliError::InputTooLarge { limit });
    }
    Ok(text)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let text = read_input(&cli.input, cli.max_input_bytes)?;
    debug!(bytes = text.len(), "read input");

    let output = render(&text, cli.dialect, cli.format, cli.max_depth)?;
    println!("{output}");
    Ok(())
}
