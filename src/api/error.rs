//! Request failure handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use miette::Diagnostic;
use thiserror::Error;
use tracing::error;

use super::ViewError;
use crate::db::StorageError;

/// A request that could not be completed.
///
/// Validation problems are not errors here; they are rendered back into the
/// form. Anything reaching this type fails the request with a 500.
#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    #[diagnostic(code(intake::api::storage))]
    Storage(#[from] StorageError),

    #[error("Rendering error: {0}")]
    #[diagnostic(code(intake::api::view))]
    View(#[from] ViewError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "The request could not be completed. Please try again later.",
        )
            .into_response()
    }
}
