//! Setlist CLI - Headless playlist tool
//!
//! Features:
//! - Playlist listing and search
//! - Manifest validation
//! - Lyrics lookup
//! - Top-tracks ranking from a play sequence

use clap::{Parser, Subcommand};
use setlist_core::SetlistConfig;
use std::path::PathBuf;

mod commands;
mod output;

/// Setlist CLI - EXTINF playlist toolkit
#[derive(Parser)]
#[command(name = "setlist")]
#[command(version)]
#[command(about = "EXTINF playlist inspection and lyrics toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json, table)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tracks of a playlist
    List {
        /// URL or path to manifest (defaults to the configured source)
        source: Option<String>,
    },

    /// Search a playlist by title or artist
    Search {
        /// Text to look for
        query: String,

        /// URL or path to manifest (defaults to the configured source)
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Check that a playlist loads and has tracks
    Validate {
        /// URL or path to manifest (defaults to the configured source)
        source: Option<String>,

        /// Fail when info lines were dropped
        #[arg(long)]
        strict: bool,
    },

    /// Look up lyrics for a song
    Lyrics {
        /// Artist name
        artist: String,

        /// Song title
        title: String,

        /// Lyrics endpoint (overrides config)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Rank tracks by a sequence of plays
    Top {
        /// Track numbers as listed, comma separated (e.g. 2,2,1,3)
        #[arg(short, long, value_delimiter = ',', required = true)]
        plays: Vec<usize>,

        /// URL or path to manifest (defaults to the configured source)
        #[arg(short, long)]
        source: Option<String>,

        /// Number of entries to show (overrides config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SetlistConfig::load(path)?,
        None => SetlistConfig::default(),
    };
    tracing::debug!(config = ?config, "Configuration loaded");

    setlist_core::init();

    let ctx = commands::Context {
        config,
        format: cli.format,
    };

    match cli.command {
        Commands::List { source } => {
            commands::list(&ctx, source.as_deref()).await?;
        }
        Commands::Search { query, source } => {
            commands::search(&ctx, source.as_deref(), &query).await?;
        }
        Commands::Validate { source, strict } => {
            commands::validate(&ctx, source.as_deref(), strict).await?;
        }
        Commands::Lyrics { artist, title, endpoint } => {
            commands::lyrics(&ctx, &artist, &title, endpoint.as_deref()).await?;
        }
        Commands::Top { plays, source, limit } => {
            commands::top(&ctx, source.as_deref(), &plays, limit).await?;
        }
    }

    Ok(())
}
