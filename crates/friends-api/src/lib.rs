//! JSON REST API for the friends record store.
//!
//! Exposes an axum [`Router`] backed by any [`friends_core::store::PersonStore`].
//! TLS, tracing layers and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = friends_api::api_router(Arc::new(store));
//! ```

pub mod error;
pub mod friends;

use std::sync::Arc;

use axum::{Router, routing::get};
use friends_core::store::PersonStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    .route("/friends", get(friends::list::<S>).post(friends::create::<S>))
    .route(
      "/friends/{id}",
      get(friends::get_one::<S>)
        .put(friends::update::<S>)
        .patch(friends::update::<S>)
        .delete(friends::delete::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
