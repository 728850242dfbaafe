//! Integration tests for `SqliteStore` against a temp-file database.
//!
//! A file (rather than `:memory:`) is required because the store opens a new
//! connection per operation; an in-memory database would vanish between them.

use roster_core::{employee::EmployeeDraft, store::EmployeeStore};
use tempfile::TempDir;

use crate::{SqliteStore, StoreConfig};

async fn store() -> (SqliteStore, TempDir) {
  let dir = tempfile::tempdir().expect("temp dir");
  let config = StoreConfig { path: dir.path().join("employees.db") };
  let store = SqliteStore::open(config).await.expect("open store");
  (store, dir)
}

fn draft(name: &str, position: &str, salary: f64) -> EmployeeDraft {
  EmployeeDraft {
    name:     Some(name.to_string()),
    position: Some(position.to_string()),
    salary:   Some(salary),
  }
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_sequential_ids_from_one() {
  let (s, _dir) = store().await;

  let first = s.insert_employee(draft("Ana", "Engineer", 50000.0)).await.unwrap();
  let second = s.insert_employee(draft("Bruno", "Analyst", 42000.0)).await.unwrap();

  assert_eq!(first, 1);
  assert_eq!(second, 2);
}

#[tokio::test]
async fn insert_persists_submitted_fields() {
  let (s, _dir) = store().await;

  let id = s.insert_employee(draft("Ana", "Engineer", 50000.0)).await.unwrap();

  let all = s.list_employees().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, id);
  assert_eq!(all[0].name, "Ana");
  assert_eq!(all[0].position, "Engineer");
  assert_eq!(all[0].salary, 50000.0);
}

#[tokio::test]
async fn insert_with_missing_field_errors() {
  let (s, _dir) = store().await;

  let incomplete = EmployeeDraft {
    name:     Some("Ana".to_string()),
    position: None,
    salary:   Some(50000.0),
  };
  let err = s.insert_employee(incomplete).await.unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)));

  // The failed insert left nothing behind.
  assert!(s.list_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn identical_inserts_are_not_deduplicated() {
  let (s, _dir) = store().await;

  let a = s.insert_employee(draft("Ana", "Engineer", 50000.0)).await.unwrap();
  let b = s.insert_employee(draft("Ana", "Engineer", 50000.0)).await.unwrap();
  let c = s.insert_employee(draft("Ana", "Engineer", 50000.0)).await.unwrap();

  assert_ne!(a, b);
  assert_ne!(b, c);
  assert_eq!(s.list_employees().await.unwrap().len(), 3);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store_returns_no_rows() {
  let (s, _dir) = store().await;
  assert!(s.list_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_orders_ascending_by_id() {
  let (s, _dir) = store().await;

  s.insert_employee(draft("Ana", "Engineer", 50000.0)).await.unwrap();
  s.insert_employee(draft("Bruno", "Analyst", 42000.0)).await.unwrap();
  s.insert_employee(draft("Carla", "Manager", 61000.0)).await.unwrap();
  s.delete_employee(2).await.unwrap();
  s.insert_employee(draft("Diego", "Designer", 45000.0)).await.unwrap();

  let ids: Vec<i64> = s.list_employees().await.unwrap().iter().map(|e| e.id).collect();
  let mut sorted = ids.clone();
  sorted.sort_unstable();
  assert_eq!(ids, sorted);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_existing_reports_one_affected_row() {
  let (s, _dir) = store().await;

  let id = s.insert_employee(draft("Ana", "Engineer", 50000.0)).await.unwrap();
  assert_eq!(s.delete_employee(id).await.unwrap(), 1);
  assert!(s.list_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_missing_reports_zero_affected_rows() {
  let (s, _dir) = store().await;

  s.insert_employee(draft("Ana", "Engineer", 50000.0)).await.unwrap();
  assert_eq!(s.delete_employee(999).await.unwrap(), 0);

  // Nothing was removed.
  assert_eq!(s.list_employees().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleted_ids_are_never_reused() {
  let (s, _dir) = store().await;

  let first = s.insert_employee(draft("Ana", "Engineer", 50000.0)).await.unwrap();
  s.delete_employee(first).await.unwrap();
  let second = s.insert_employee(draft("Bruno", "Analyst", 42000.0)).await.unwrap();

  assert!(second > first);
}

// ─── Connection lifecycle ────────────────────────────────────────────────────

#[tokio::test]
async fn rows_survive_across_store_handles() {
  let dir = tempfile::tempdir().expect("temp dir");
  let config = StoreConfig { path: dir.path().join("employees.db") };

  let first = SqliteStore::open(config.clone()).await.unwrap();
  first.insert_employee(draft("Ana", "Engineer", 50000.0)).await.unwrap();
  drop(first);

  // A second handle over the same config sees the committed row; every
  // operation opened and closed its own connection along the way.
  let second = SqliteStore::open(config).await.unwrap();
  let all = second.list_employees().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].name, "Ana");
}
