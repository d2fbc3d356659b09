use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_core::error::ShapeError;

use crate::common::CommonDataError;

/// The one body every failed route returns. Clients cannot distinguish a
/// database failure from a metadata-file failure; the full error goes to
/// the server log only.
pub const ERROR_BODY: &str = "Error consultant la base de dades";

/// Application-level error type for HTTP handlers.
///
/// Every variant maps to the same 500 plain-text response; the taxonomy
/// exists for logging and for tests.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failed SQL execution (or pool checkout).
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// Row-to-view-model shaping failed.
    #[error("View shaping failed: {0}")]
    Shape(#[from] ShapeError),

    /// The common metadata document is missing or unreadable.
    #[error("Common data unavailable: {0}")]
    ResourceRead(#[from] CommonDataError),

    /// Template rendering failed.
    #[error("Render failed: {0}")]
    Render(#[from] askama::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, detail = ?self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, ERROR_BODY).into_response()
    }
}
