//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Every store-facing failure is converted into one of these at the handler
/// boundary; nothing propagates past it and no request failure is fatal to
/// the process.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The addressed row does not exist. Renders as 404 `{"message": …}`.
  #[error("{0}")]
  NotFound(&'static str),

  /// Connection or statement failure. Renders as 500 with the
  /// operation-specific message and the underlying detail text.
  #[error("{message}: {source}")]
  Store {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(message) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": message })))
          .into_response()
      }
      ApiError::Store { message, source } => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": message, "error": source.to_string() })),
      )
        .into_response(),
    }
  }
}
