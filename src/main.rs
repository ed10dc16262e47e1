use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "womtrack")]
#[command(about = "Tracks an OSRS group's gains and posts Discord ranking digests")]
#[command(version)]
struct Cli {
    /// Working directory for config lookup (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to womtrack.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch gains, rank the group, and post the embeds to the webhook
    Run,

    /// Fetch gains and print the embeds without delivering anything
    Preview,

    /// Initialize a new womtrack.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Preview) => {
            cli::preview::preview_command(&work_dir, config_path)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(&work_dir, force)?;
        }
        Some(Commands::Run) | None => {
            // Default: run the full batch
            cli::run::run_command(&work_dir, config_path)?;
        }
    }

    Ok(())
}
