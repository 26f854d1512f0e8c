//! resample - convert raw PCM audio between sample rates.

mod config;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use giztoy_resample::{Resampler, SampleFormat};
use tracing::{debug, info};

use config::{ConfigFile, Overrides, Settings};

/// Convert raw interleaved PCM audio from one sample rate to another.
///
/// Input and output are headerless little-endian PCM. Settings can come
/// from a YAML file (channels, from_rate, to_rate, format); flags override it.
#[derive(Parser, Debug)]
#[command(name = "resample")]
#[command(about = "Resample raw PCM audio")]
#[command(version)]
struct Args {
    /// Input file (default: stdin)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Settings file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of interleaved channels
    #[arg(short = 'c', long)]
    channels: Option<i64>,

    /// Source sample rate in Hz
    #[arg(long = "from")]
    from_rate: Option<i64>,

    /// Target sample rate in Hz
    #[arg(long = "to")]
    to_rate: Option<i64>,

    /// Sample encoding: s16le, f32le or f64le
    #[arg(short = 'f', long)]
    format: Option<SampleFormat>,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let settings = Settings::resolve(
        file,
        Overrides {
            channels: args.channels,
            from_rate: args.from_rate,
            to_rate: args.to_rate,
            format: args.format,
        },
    )?;
    debug!(?settings, "resolved settings");

    let input = read_input(args.input.as_ref())?;
    let resampler = Resampler::new(settings.config);
    let output = resampler
        .resample_bytes(&input, settings.format)
        .context("failed to resample input")?;

    info!(
        input_bytes = input.len(),
        output_bytes = output.len(),
        format = %settings.format,
        "resampled"
    );
    write_output(args.output.as_ref(), &output)
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut data = Vec::new();
            io::stdin()
                .read_to_end(&mut data)
                .context("failed to read stdin")?;
            Ok(data)
        }
    }
}

fn write_output(path: Option<&PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data).context("failed to write stdout")?;
            stdout.flush().context("failed to flush stdout")
        }
    }
}
