//! Server wiring for the friends record service.
//!
//! Holds the runtime configuration, the top-level router (API plus HTTP
//! tracing) and the seed generator used by the `seed` subcommand.

pub mod seed;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use friends_core::store::PersonStore;
use friends_store_sqlite::TableName;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `friends.toml` and
/// `FRIENDS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
  pub table:         String,
}

impl ServerConfig {
  /// `host:port` suitable for [`tokio::net::TcpListener::bind`].
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The database path with a leading `~/` expanded.
  pub fn store_path(&self) -> PathBuf { expand_tilde(&self.database_path) }
}

/// Layer defaults, the optional config file at `path`, and the environment.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8000_i64)?
    .set_default("database_path", "friends_birthdays.db")?
    .set_default("table", TableName::DEFAULT)?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("FRIENDS"))
    .build()?
    .try_deserialize()
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

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application router: the JSON API wrapped in request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: PersonStore + 'static,
{
  friends_api::api_router(store).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use friends_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
      .join(format!("friends-server-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn missing_config_file_uses_defaults() {
    let dir = temp_dir("defaults");
    let cfg = load_config(&dir.join("absent.toml")).unwrap();
    assert_eq!(cfg.table, "friends");
    assert!(!cfg.host.is_empty());
    let _ = std::fs::remove_dir_all(&dir);
  }

  #[test]
  fn config_file_overrides_defaults() {
    let dir = temp_dir("file");
    let path = dir.join("friends.toml");
    std::fs::write(
      &path,
      "host = \"0.0.0.0\"\nport = 9123\ndatabase_path = \"/tmp/x.db\"\ntable = \"people\"\n",
    )
    .unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.address(), "0.0.0.0:9123");
    assert_eq!(cfg.database_path, PathBuf::from("/tmp/x.db"));
    assert_eq!(cfg.table, "people");
    let _ = std::fs::remove_dir_all(&dir);
  }

  #[test]
  fn store_path_expands_home() {
    let cfg = ServerConfig {
      host:          "127.0.0.1".into(),
      port:          8000,
      database_path: PathBuf::from("~/friends.db"),
      table:         "friends".into(),
    };
    match std::env::var("HOME") {
      Ok(home) => assert_eq!(cfg.store_path(), PathBuf::from(home).join("friends.db")),
      Err(_) => assert_eq!(cfg.store_path(), PathBuf::from("~/friends.db")),
    }
  }

  #[test]
  fn store_path_leaves_other_paths_alone() {
    for p in ["friends.db", "/var/lib/friends.db", "~other/friends.db"] {
      assert_eq!(expand_tilde(Path::new(p)), PathBuf::from(p));
    }
  }

  #[tokio::test]
  async fn router_serves_the_api() {
    let store = SqliteStore::open_in_memory(TableName::default()).await.unwrap();
    let req = Request::builder().uri("/friends").body(Body::empty()).unwrap();
    let resp = router(Arc::new(store)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
