//! chunk-index — per-volume chunk index over embedded key-value stores
//!
//! Usage:
//!   chunk-index put  --config config.toml --volume vol1 --chunk-id chunkA \
//!                    --container cid1 --path /a/b
//!   chunk-index dump --config config.toml --volume vol1
//!   chunk-index status --config config.toml

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use chunk_index::config::Config;
use chunk_index::index::manager::VolumeIndexManager;

#[derive(Parser)]
#[command(name = "chunk-index", about = "Per-volume chunk index", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record one chunk in a volume's index.
    Put {
        /// Path to the TOML configuration file.
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
        /// Volume to index into.
        #[arg(long)]
        volume: String,
        /// Chunk identifier.
        #[arg(long)]
        chunk_id: String,
        /// Content container identifier.
        #[arg(long)]
        container: String,
        /// Content path.
        #[arg(long)]
        path: String,
    },
    /// Print every index entry of a volume.
    Dump {
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
        #[arg(long)]
        volume: String,
    },
    /// Print the configured base directory and on-disk volumes.
    Status {
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Put {
            config,
            volume,
            chunk_id,
            container,
            path,
        } => run_put(&config, &volume, &chunk_id, &container, &path),
        Command::Dump { config, volume } => run_dump(&config, &volume),
        Command::Status { config } => run_status(&config),
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

fn load_manager(config_path: &std::path::Path) -> anyhow::Result<VolumeIndexManager> {
    let cfg = Config::from_file(config_path)?;
    Ok(VolumeIndexManager::new(&cfg.index)?)
}

fn run_put(
    config_path: &std::path::Path,
    volume: &str,
    chunk_id: &str,
    container: &str,
    path: &str,
) -> anyhow::Result<()> {
    let manager = load_manager(config_path)?;
    manager.put(volume, chunk_id, container, path)?;
    Ok(())
}

fn run_dump(config_path: &std::path::Path, volume: &str) -> anyhow::Result<()> {
    let manager = load_manager(config_path)?;
    let data = manager.dump(volume)?;
    for (key, value) in &data {
        println!("{key}\t{value}");
    }
    Ok(())
}

fn run_status(config_path: &std::path::Path) -> anyhow::Result<()> {
    let cfg = Config::from_file(config_path)?;
    println!("=== chunk-index status ===");
    println!("Base dir : {}", cfg.index.db_path.display());

    // List volume directories already created on disk; nothing is opened.
    let mut volumes = Vec::new();
    if cfg.index.db_path.is_dir() {
        for entry in std::fs::read_dir(&cfg.index.db_path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                volumes.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
    }
    volumes.sort();
    println!("Volumes  : {}", volumes.len());
    for v in &volumes {
        println!("  {v}");
    }
    Ok(())
}
