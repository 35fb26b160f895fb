//! Error types for the Compass server application.
//!
//! This module provides the error handling system for the reporting service, with
//! specialized error types for configuration and report generation. Errors use `thiserror`
//! for `Display` and `Error` implementations; report handlers translate them into HTTP
//! responses through [`report::ReportFailure`].

pub mod config;
pub mod report;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, report::ReportError},
};

/// Main error type for the Compass server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Report errors (validation, timeouts, cancellation)
/// - External library errors (database, spreadsheet writer, zip archive, file system)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Report error (invalid filters, generation timeout, cancellation).
    #[error(transparent)]
    ReportError(#[from] ReportError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Spreadsheet serialization error.
    #[error(transparent)]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),
    /// Presentation package (zip archive) error.
    #[error(transparent)]
    ZipError(#[from] zip::result::ZipError),
    /// File system error while persisting a generated report.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Blocking report task panicked or was aborted.
    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error and returns only the given client-facing message, so
/// implementation details never reach the client.
pub struct InternalServerError<E>(pub E, pub &'static str);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}: {}", self.1, self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: self.1.to_string(),
            }),
        )
            .into_response()
    }
}
