//! roster-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite-backed employee store, and serves the JSON API over HTTP.
//!
//! Configuration keys (`ROSTER_*` environment variables override the file):
//! `host` (default `127.0.0.1`), `port` (default `3000`), `store_path`
//! (default `employees.db`).

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use roster_store_sqlite::{SqliteStore, StoreConfig};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Roster employee service")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Deserialize, Clone)]
struct ServerConfig {
  host:       String,
  port:       u16,
  store_path: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 3000)?
    .set_default("store_path", "employees.db")?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ROSTER"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open the SQLite store. Every request will open and close its own
  // connection against this path; only the config is held long-term.
  let store = SqliteStore::open(StoreConfig { path: store_path.clone() })
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  // The API is consumed by a browser frontend; CORS stays permissive.
  let app = roster_api::api_router(Arc::new(store))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
