//! Employee — the single entity this service manages.

use serde::{Deserialize, Serialize};

/// One row of the `employees` table.
///
/// `id` is assigned by the store on insert and never changes (or gets reused)
/// afterwards. There is no update operation anywhere in the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub id:       i64,
  pub name:     String,
  pub position: String,
  pub salary:   f64,
}

/// Field values for an employee about to be inserted.
///
/// Every field is optional on purpose: the service performs no validation of
/// its own, so a missing field is bound as NULL and rejected by the store's
/// NOT NULL constraints rather than up front.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDraft {
  pub name:     Option<String>,
  pub position: Option<String>,
  pub salary:   Option<f64>,
}
