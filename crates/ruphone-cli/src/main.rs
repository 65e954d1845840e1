//! CLI application for extracting Russian phone numbers from text files.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use ruphone_core::{PhoneExtractor, RuphoneConfig, executable_dir};

/// Extract unique Russian phone numbers from a text file
#[derive(Parser)]
#[command(name = "ruphone")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to scan (default: input.txt next to the executable)
    input: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(cli.config.as_deref())?;
    let input = cli
        .input
        .unwrap_or_else(|| config.resolve_input(&executable_dir()));

    debug!("Scanning {}", input.display());

    // Failures are already logged by the extractor; print whatever was found.
    let phones = PhoneExtractor::new(input).extract().into_numbers();
    for phone in &phones {
        println!("{}", phone);
    }

    Ok(())
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ruphone").join("config.json"))
}

/// Explicit config path must load; the per-user default is optional.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<RuphoneConfig> {
    if let Some(path) = explicit {
        return Ok(RuphoneConfig::from_file(path)?);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            debug!("Loading config from {}", path.display());
            Ok(RuphoneConfig::from_file(&path)?)
        }
        _ => Ok(RuphoneConfig::default()),
    }
}
