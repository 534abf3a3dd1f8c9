//! Trivia API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;
use trivia::api::{self, Config, ServerError};
use trivia::db::{Database, DbError, SqliteDatabase};
use trivia::paths::get_db_path;
use trivia::selection::PickPolicy;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(trivia::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(trivia::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(trivia::binary::api))]
    Api(#[from] ServerError),
}

#[derive(Parser)]
#[command(name = "trivia-api")]
#[command(author, version, about = "Trivia game API server", long_about = None)]
struct Cli {
    /// Host address to bind to (overrides TRIVIA_HOST, default 127.0.0.1)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides TRIVIA_PORT, default 5000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path (overrides TRIVIA_DB_PATH, defaults to ~/.local/share/trivia/trivia.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Quiz question selection: random or first (overrides TRIVIA_QUIZ_PICK)
    #[arg(long)]
    pick: Option<PickPolicy>,

    /// Insert the default categories before serving
    #[arg(long)]
    seed: bool,
}

impl Cli {
    /// Precedence: CLI flag > env var > default
    fn config(&self) -> Config {
        let mut config = Config::new();
        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(pick) = self.pick {
            config = config.with_pick_policy(pick);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    let config = cli.config();
    let db_path = cli.db.clone().unwrap_or_else(get_db_path);
    info!(path = %db_path.display(), "opening database");

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!("database migrations complete");

    if cli.seed {
        db.seed().await?;
    }

    // Pass the abstract Database to the API layer
    api::run(config, db).await?;

    Ok(())
}
