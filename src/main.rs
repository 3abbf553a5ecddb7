//! # Resume Rank CLI (`rrank`)
//!
//! ## Usage
//!
//! ```bash
//! rrank --config ./config/rrank.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rrank serve` | Start the resume upload form and ranking endpoint |
//! | `rrank score <FILE>...` | Rank resume files straight from disk |
//!
//! ## Examples
//!
//! ```bash
//! # Start the web form
//! rrank serve --config ./config/rrank.toml
//!
//! # Rank a handful of resumes without the web form
//! rrank score resumes/alice.pdf resumes/bob.docx
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use resume_rank::config;
use resume_rank::server;
use resume_rank::staging::StagingBuffer;

/// Resume Rank CLI — upload PDF/DOCX resumes, extract an academic score,
/// rank candidates.
#[derive(Parser)]
#[command(
    name = "rrank",
    about = "Resume Rank — rank uploaded resumes by extracted CGPA/percentage",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/rrank.toml`. Falls back to built-in defaults
    /// when the file does not exist.
    #[arg(long, global = true, default_value = "./config/rrank.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP upload form and ranking endpoint.
    ///
    /// Binds to the address configured in `[server].bind` and serves the
    /// single-page upload UI.
    Serve,

    /// Rank resume files from disk.
    ///
    /// Stages the given files through the same pipeline as the web form
    /// (same allow-list, same batch limit, same score heuristic) and prints
    /// the ranked table. Files with a disallowed extension are dropped.
    Score {
        /// Resume files to rank (`.pdf` / `.docx`).
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let cfg = config::load_config(&cli.config).unwrap_or_else(|_| config::Config::minimal());

    match cli.command {
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
        Commands::Score { files } => {
            run_score(&cfg, &files)?;
        }
    }

    Ok(())
}

/// Stages the named files and commits them as one batch, printing the
/// ranked result.
fn run_score(cfg: &config::Config, files: &[PathBuf]) -> anyhow::Result<()> {
    let buffer = StagingBuffer::new();
    for path in files {
        let content = std::fs::read(path)
            .with_context(|| format!("Failed to read resume file: {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        buffer.stage(&filename, content);
    }

    let candidates = buffer.commit(cfg).context("Batch commit failed")?;

    println!("{:<6} {:<40} {:>8}", "rank", "resume", "score");
    for c in &candidates {
        println!("{:<6} {:<40} {:>8.2}", c.rank, c.filename, c.score);
    }

    Ok(())
}
