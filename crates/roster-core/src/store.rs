//! The `EmployeeStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! The HTTP layer (`roster-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::employee::{Employee, EmployeeDraft};

/// Abstraction over an employee store backend.
///
/// Implementations acquire and release whatever connection they need inside
/// each method; callers never hold a connection across calls. All methods
/// return `Send` futures so the trait can be used in multi-threaded async
/// runtimes (e.g. tokio with `axum`).
pub trait EmployeeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every employee, ordered ascending by id.
  fn list_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Insert a new employee and return the store-assigned id.
  ///
  /// Draft fields are passed through as-is; constraint enforcement is the
  /// store's job.
  fn insert_employee(
    &self,
    draft: EmployeeDraft,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Delete the employee with the given id, returning the number of rows
  /// actually removed (0 when the id does not exist).
  fn delete_employee(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
