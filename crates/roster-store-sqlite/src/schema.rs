//! SQL schema for the Roster SQLite store.
//!
//! Executed once when the store is opened. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// AUTOINCREMENT keeps id allocation monotone: a deleted id is never handed
/// out again, so ids stay stable for the lifetime of the database.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS employees (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL,
    position TEXT NOT NULL,
    salary   REAL NOT NULL
);

PRAGMA user_version = 1;
";
