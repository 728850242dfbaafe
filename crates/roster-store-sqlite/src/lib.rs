//! SQLite backend for the Roster employee store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Unlike a pooled backend, every
//! operation opens its own connection and closes it before returning.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{SqliteStore, StoreConfig};

#[cfg(test)]
mod tests;
