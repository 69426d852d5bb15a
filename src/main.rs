//! morse-encoder - encodes a text file into Morse code
//!
//! Usage:
//!   morse-encoder [--table <path>] [--input <path>] [--output <path>]
//!
//! Paths not given on the command line are taken from the environment
//! (`MORSE_TABLE_PATH`, `MORSE_INPUT_PATH`, `MORSE_OUTPUT_PATH`) or asked
//! for interactively. Without `--table` or `MORSE_TABLE_PATH` the bundled
//! table is read from `data/morsecode.txt` under the working directory.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use morse_lookup::encoder::{
    ConfigError, EncoderConfig, encode_file, load_table_from_path, prompt_filename,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "morse-encoder")]
#[command(about = "Encodes a text file into Morse code using a two-column mapping table")]
struct Cli {
    /// Mapping table file (one `<character> <code>` record per line) [default: data/morsecode.txt]
    #[arg(long)]
    table: Option<PathBuf>,

    /// Text file to encode
    #[arg(long)]
    input: Option<PathBuf>,

    /// File to write the encoded lines to
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,morse_lookup=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config();

    let table_path = cli.table.unwrap_or(config.table_path);
    let table = load_table_from_path(&table_path)
        .with_context(|| format!("loading mapping table {}", table_path.display()))?;
    tracing::info!(entries = table.len(), "mapping table ready");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let input_path = match cli.input.or(config.input_path) {
        Some(path) => path,
        None => ask(&mut input, &mut output, "Enter an input filename:", true)?,
    };
    let output_path = match cli.output.or(config.output_path) {
        Some(path) => path,
        None => ask(&mut input, &mut output, "Enter an output filename:", false)?,
    };

    encode_file(&table, &input_path, &output_path).with_context(|| {
        format!(
            "encoding {} into {}",
            input_path.display(),
            output_path.display()
        )
    })?;

    Ok(())
}

fn load_config() -> EncoderConfig {
    EncoderConfig::from_env().unwrap_or_else(|error: ConfigError| {
        tracing::warn!("Failed to load configuration from environment: {error}");
        tracing::info!("Using default configuration");
        EncoderConfig::default()
    })
}

fn ask(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    must_exist: bool,
) -> anyhow::Result<PathBuf> {
    prompt_filename(input, output, prompt, must_exist).context("reading filename")
}
