//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by any [`roster_core::EmployeeStore`].
//! CORS, tracing, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! axum::serve(listener, roster_api::api_router(store.clone())).await?;
//! ```

pub mod employees;
pub mod error;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get},
};
use roster_core::store::EmployeeStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EmployeeStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/employees",
      get(employees::list::<S>).post(employees::create::<S>),
    )
    .route("/employees/{id}", delete(employees::delete_one::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
