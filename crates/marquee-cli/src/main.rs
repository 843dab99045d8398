use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_core::MarqueeConfig;

mod commands;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(version, about = "Authoring tool for scrolling status-text animations")]
struct Cli {
    /// Path to a marquee.toml with animation and trim defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate scrolling frames from text
    Generate(commands::generate::GenerateArgs),
    /// Remove color-continuation artifacts from a snapshot file
    Clean {
        /// Snapshot file to clean
        snapshot: PathBuf,
        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Tick through a snapshot and print each frame
    Play {
        /// Snapshot file to play
        snapshot: PathBuf,
        /// Number of ticks
        #[arg(short = 'n', long, default_value_t = 16)]
        ticks: u32,
        /// Apply the display budget to each frame
        #[arg(long)]
        trim: bool,
        /// Use the long-line budget when trimming
        #[arg(long)]
        long: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let config = MarqueeConfig::load(path)?;
            tracing::debug!("Loaded configuration from {}", path.display());
            config
        }
        None => MarqueeConfig::default(),
    };

    match cli.command {
        Commands::Generate(args) => commands::generate::run(&config, args),
        Commands::Clean { snapshot, output } => {
            commands::clean::run(&snapshot, output.as_deref())
        }
        Commands::Play {
            snapshot,
            ticks,
            trim,
            long,
        } => commands::play::run(&config, &snapshot, ticks, trim, long),
    }
}
