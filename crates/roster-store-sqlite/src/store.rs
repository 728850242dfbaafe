//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::path::PathBuf;

use roster_core::{
  employee::{Employee, EmployeeDraft},
  store::EmployeeStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Connection settings for the employees database.
///
/// Built once at startup and owned by the store; nothing mutates it. Every
/// operation opens its own connection from these settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
  pub path: PathBuf,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee store backed by a single SQLite file.
///
/// The store itself holds no connection — only the immutable [`StoreConfig`].
/// Each operation acquires a fresh connection, runs its statements, and
/// releases the connection on every exit path.
#[derive(Clone)]
pub struct SqliteStore {
  config: StoreConfig,
}

impl SqliteStore {
  /// Open a store for `config` and run schema initialisation.
  pub async fn open(config: StoreConfig) -> Result<Self> {
    let store = Self { config };
    store
      .with_conn(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(store)
  }

  /// Run `f` on a connection opened for this call alone.
  ///
  /// The connection is closed whether `f` succeeds or fails. A close failure
  /// after the outcome is decided is logged and does not change the result.
  async fn with_conn<T, F>(&self, f: F) -> Result<T>
  where
    T: Send + 'static,
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<T>
      + Send
      + 'static,
  {
    let conn = tokio_rusqlite::Connection::open(self.config.path.clone())
      .await
      .map_err(Error::Database)?;

    let result = conn.call(f).await;

    if let Err(e) = conn.close().await {
      tracing::warn!("failed to close connection: {e}");
    }

    Ok(result?)
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  type Error = Error;

  async fn list_employees(&self) -> Result<Vec<Employee>> {
    self
      .with_conn(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, position, salary FROM employees ORDER BY id ASC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Employee {
              id:       row.get(0)?,
              name:     row.get(1)?,
              position: row.get(2)?,
              salary:   row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
  }

  async fn insert_employee(&self, draft: EmployeeDraft) -> Result<i64> {
    let EmployeeDraft { name, position, salary } = draft;

    // SQLite has no stored procedures; RETURNING gives the same contract
    // (store-assigned id handed back from a single autocommitted statement).
    // NULL draft fields hit the NOT NULL constraints here.
    self
      .with_conn(move |conn| {
        let id = conn.query_row(
          "INSERT INTO employees (name, position, salary)
           VALUES (?1, ?2, ?3)
           RETURNING id",
          rusqlite::params![name, position, salary],
          |row| row.get(0),
        )?;
        Ok(id)
      })
      .await
  }

  async fn delete_employee(&self, id: i64) -> Result<usize> {
    self
      .with_conn(move |conn| {
        let affected = conn.execute(
          "DELETE FROM employees WHERE id = ?1",
          rusqlite::params![id],
        )?;
        Ok(affected)
      })
      .await
  }
}
