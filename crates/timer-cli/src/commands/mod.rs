//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod note;
pub mod start;
pub mod status;
pub mod stop;
pub mod summary;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use timer_core::config::Config;
use timer_core::session::SessionManager;
use timer_core::TimerError;
use timer_storage::JsonFileStore;

/// timer - Benchmark your dev projects milestone by milestone
#[derive(Debug, Parser)]
#[command(name = "timer")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TIMER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Session data file (overrides the config file)
    #[arg(long, global = true, env = "TIMER_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a new timer
    #[command(alias = "s")]
    Start(start::StartArgs),

    /// Stop the running timer
    Stop(stop::StopArgs),

    /// Show the current timer status
    #[command(alias = "st")]
    Status(status::StatusArgs),

    /// Set the note on the last completed session
    Note(note::NoteArgs),

    /// Show all completed sessions
    Summary(summary::SummaryArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Resolved settings shared by all commands
pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub data_file: PathBuf,
}

impl AppContext {
    /// Load configuration and pick the data file
    fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = cli.config.clone().unwrap_or_else(default_config_path);
        let config = Config::load(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

        let data_file = cli
            .data_file
            .clone()
            .or_else(|| config.storage.data_file.clone())
            .unwrap_or_else(JsonFileStore::default_path);
        tracing::debug!("Using data file {:?}", data_file);

        Ok(Self {
            config,
            config_path,
            data_file,
        })
    }

    /// Session manager over the resolved data file
    pub fn manager(&self) -> SessionManager {
        SessionManager::new(JsonFileStore::new(&self.data_file))
    }
}

/// Platform config file path (falls back to ~/.milestone-timer)
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "milestone-timer", "milestone-timer")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".milestone-timer")
        })
        .join("config.toml")
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = AppContext::resolve(&cli)?;

    // Dispatch to command handler
    match cli.command {
        Commands::Start(args) => start::execute(&ctx, args),
        Commands::Stop(args) => stop::execute(&ctx, args),
        Commands::Status(args) => status::execute(&ctx, args),
        Commands::Note(args) => note::execute(&ctx, args),
        Commands::Summary(args) => summary::execute(&ctx, args),
        Commands::Config(cmd) => config::execute(&ctx, cmd),
    }
}

/// Process exit status for a failed run
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let timer_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<TimerError>());

    match timer_error {
        Some(TimerError::TimerAlreadyRunning { .. }) => 3,
        Some(TimerError::NoTimerRunning) => 4,
        Some(TimerError::NoCompletedSession) => 5,
        Some(TimerError::CorruptData { .. }) => 6,
        Some(TimerError::Storage(_)) => 7,
        _ => 1,
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
