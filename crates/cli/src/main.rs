//! `record-catalog` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the web server.
//! - `init-db` — create the records table and exit.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";

#[derive(Parser)]
#[command(
    name = "record-catalog",
    about = "Small web catalog of named, categorised values",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
        bind: String,
        #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,
        #[arg(long, default_value_t = 5)]
        max_connections: u32,
    },
    /// Create the records table if it does not exist.
    InitDb {
        #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, database_url, max_connections } => {
            info!("Starting web server on {bind}");
            let store = db::RecordStore::open(&database_url, max_connections)
                .await
                .with_context(|| format!("failed to open database {database_url}"))?;
            api::serve(&bind, store).await.context("server failed")?;
        }
        Command::InitDb { database_url } => {
            info!("Ensuring schema in {database_url}");
            let store = db::RecordStore::open(&database_url, 1)
                .await
                .with_context(|| format!("failed to open database {database_url}"))?;
            store.close().await;
            info!("Schema ready");
        }
    }

    Ok(())
}
