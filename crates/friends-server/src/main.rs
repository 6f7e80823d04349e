//! `friends`: server and seeding binary for the friends record store.
//!
//! Reads `friends.toml` (or the path specified with `--config`) plus
//! `FRIENDS_*` environment variables, opens the SQLite store, and either
//! serves the JSON API over HTTP or fills the store with synthetic records.
//!
//! ```
//! friends serve
//! friends seed --count 500
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use friends_server::{
  load_config,
  seed::{self, AgeRange, SeedGenerator},
};
use friends_store_sqlite::{SqliteStore, TableName};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Friends birthday record service")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "friends.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the JSON API over HTTP.
  Serve,

  /// Insert synthetic people into the store.
  Seed {
    /// How many records to generate.
    #[arg(short = 'n', long, default_value_t = seed::DEFAULT_COUNT)]
    count: usize,

    /// Youngest generated age, in years.
    #[arg(long, default_value_t = 0)]
    min_age: u32,

    /// Oldest generated age, in years.
    #[arg(long, default_value_t = 80)]
    max_age: u32,

    /// Fixed RNG seed for reproducible data.
    #[arg(long)]
    rng_seed: Option<u64>,
  },
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

  let server_cfg = load_config(&cli.config).context("failed to load configuration")?;
  let table = TableName::new(server_cfg.table.as_str()).context("bad `table` setting")?;
  let store_path = server_cfg.store_path();

  // Schema creation failure is fatal.
  let store = SqliteStore::open(&store_path, table)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  match cli.command {
    Command::Serve => {
      let app = friends_server::router(Arc::new(store));
      let address = server_cfg.address();

      tracing::info!("Listening on http://{address}");
      let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

      axum::serve(listener, app).await.context("server error")?;
    }
    Command::Seed { count, min_age, max_age, rng_seed } => {
      let ages = AgeRange::new(min_age, max_age)?;
      let today = chrono::Local::now().date_naive();
      let mut generator = match rng_seed {
        Some(s) => SeedGenerator::from_seed(s, ages, today),
        None => SeedGenerator::from_entropy(ages, today),
      };

      let people = seed::seed(&store, &mut generator, count)
        .await
        .context("seeding failed")?;
      println!("Added {} friends to {}", people.len(), store_path.display());
    }
  }

  Ok(())
}
