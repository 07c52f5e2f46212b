//! Inlet CLI - Incremental document ingestion into a vector index

mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Inlet - Incremental document ingestion into a vector index
#[derive(Parser)]
#[command(name = "inlet")]
#[command(version)]
#[command(about = "Incremental document ingestion into a vector index", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default config file
    Init,

    /// Run an incremental ingestion pass
    Run {
        /// Show what would be processed without processing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show manifest status
    Status,

    /// Check availability of external extraction tools
    Tools,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("inlet=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("inlet=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Run { dry_run } => commands::run::run(dry_run),
        Commands::Status => commands::status::run(),
        Commands::Tools => commands::tools::run(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
