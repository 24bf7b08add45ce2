//! Chromawheel - color harmony palettes from the command line or an
//! interactive terminal hue wheel.
//!
//! Run without a subcommand to open the picker UI.

use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromawheel::cli::{CliError, ConfigArgs, ConvertArgs, HarmoniesArgs, PaletteArgs};
#[cfg(feature = "ratatui")]
use chromawheel::config::Config;

/// Chromawheel - color harmony palette generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a harmony palette from a base color
    Palette(PaletteArgs),
    /// Convert a color between hex, rgb() and hsl()
    Convert(ConvertArgs),
    /// List the available harmony rules
    Harmonies(HarmoniesArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Logs to stderr for one-shot commands.
fn init_cli_tracing(verbose: bool) {
    let filter = log_filter(verbose);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Logs to a file in the config directory while the UI owns the terminal.
#[cfg(feature = "ratatui")]
fn init_tui_tracing(verbose: bool) -> Result<()> {
    use anyhow::Context;
    use chromawheel::constants::LOG_FILE_NAME;
    use std::fs::OpenOptions;
    use std::sync::Mutex;

    let dir = Config::config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = log_filter(verbose);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn run_command(command: &Command) -> Result<(), CliError> {
    match command {
        Command::Palette(args) => args.execute(),
        Command::Convert(args) => args.execute(),
        Command::Harmonies(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}

#[cfg(feature = "ratatui")]
fn run_picker(verbose: bool) -> Result<()> {
    if let Err(e) = init_tui_tracing(verbose) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration, using defaults: {e:#}");
        Config::default()
    });
    chromawheel::tui::run(&config)
}

#[cfg(not(feature = "ratatui"))]
fn run_picker(_verbose: bool) -> Result<()> {
    anyhow::bail!("This build has no terminal UI; use a subcommand (see --help)")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return run_picker(cli.verbose);
    };

    init_cli_tracing(cli.verbose);
    if let Err(err) = run_command(&command) {
        eprintln!("Error: {err}");
        process::exit(err.exit_code().code());
    }
    Ok(())
}
