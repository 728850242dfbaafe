//! Handlers for `/employees` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/employees` | Full list, ascending by id |
//! | `POST`   | `/employees` | Body: `{"name","position","salary"}`; 201 + refreshed full list |
//! | `DELETE` | `/employees/:id` | 404 if id absent; 200 + refreshed full list |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{
  employee::{Employee, EmployeeDraft},
  store::EmployeeStore,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── Envelope ─────────────────────────────────────────────────────────────────

/// Success envelope shared by all three operations: a human-readable message
/// plus the full employee list.
#[derive(Debug, Serialize)]
pub struct Envelope {
  pub message: &'static str,
  pub data:    Vec<Employee>,
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Envelope>, ApiError>
where
  S: EmployeeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let data = store.list_employees().await.map_err(|e| ApiError::Store {
    message: "error listing employees",
    source:  Box::new(e),
  })?;
  Ok(Json(Envelope { message: "list obtained", data }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /employees`.
///
/// Fields are optional on purpose — there is no request-level validation, so
/// a missing field reaches the store as NULL and fails its constraints there
/// (surfacing as 500, same as any other store error).
#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name:     Option<String>,
  pub position: Option<String>,
  pub salary:   Option<f64>,
}

impl From<CreateBody> for EmployeeDraft {
  fn from(b: CreateBody) -> Self {
    EmployeeDraft { name: b.name, position: b.position, salary: b.salary }
  }
}

/// `POST /employees` — inserts, then returns 201 with the *refreshed full
/// list* rather than the new row alone (the frontend repaints its table from
/// this response).
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EmployeeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let store_err = |e: S::Error| ApiError::Store {
    message: "error inserting employee",
    source:  Box::new(e),
  };

  let _id = store.insert_employee(body.into()).await.map_err(store_err)?;
  let data = store.list_employees().await.map_err(store_err)?;

  Ok((
    StatusCode::CREATED,
    Json(Envelope { message: "employee inserted", data }),
  ))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /employees/:id`
///
/// Checks the affected-row count: zero rows means the id was absent, and no
/// further query is run.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Envelope>, ApiError>
where
  S: EmployeeStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let store_err = |e: S::Error| ApiError::Store {
    message: "error deleting employee",
    source:  Box::new(e),
  };

  let affected = store.delete_employee(id).await.map_err(store_err)?;
  if affected == 0 {
    return Err(ApiError::NotFound("employee not found"));
  }

  let data = store.list_employees().await.map_err(store_err)?;
  Ok(Json(Envelope { message: "employee deleted", data }))
}
