//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Failure acquiring a connection or executing a statement. Close failures
  /// after a decided outcome are logged instead, never surfaced here.
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
