//! Intake server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use intake::api::{self, ApiError, Config};
use intake::db::{Database, SqliteDatabase, StorageError};
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(intake::binary::database))]
    Database(#[from] StorageError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(intake::binary::io))]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    #[diagnostic(code(intake::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "intake-api")]
#[command(author, version, about = "Patient intake form server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, env = "INTAKE_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "INTAKE_PORT", default_value = "5000")]
    port: u16,

    /// SQLite database file path
    #[arg(long, env = "INTAKE_DB", default_value = "patients.db")]
    db: PathBuf,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    api::init_tracing();
    serve(cli).await?;
    Ok(())
}

async fn serve(cli: Cli) -> Result<(), BinaryError> {
    info!(path = %cli.db.display(), "Opening database");

    // Ensure parent directory exists
    if let Some(parent) = cli.db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&cli.db).await?;

    // Schema must exist before serving traffic
    db.ensure_schema().await?;
    info!("Database schema ready");

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        db,
    )
    .await?;

    Ok(())
}
