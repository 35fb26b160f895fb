use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report request is missing timePeriod or reportType")]
    MissingParameters,
    #[error("Unsupported report type: {0:?}")]
    InvalidReportType(String),
    #[error("Report generation did not finish within {0:?}")]
    TimedOut(Duration),
    #[error("Report generation was cancelled before the file was written")]
    Cancelled,
    #[error("Failed to allocate a unique report file name in {0}")]
    NameExhausted(String),
}

impl ReportError {
    /// 400 response for errors caused by the client's request, `None` for server-side errors.
    pub fn validation_response(&self) -> Option<Response> {
        let message = match self {
            Self::MissingParameters => "Missing required parameters",
            Self::InvalidReportType(_) => "Invalid report type",
            Self::TimedOut(_) | Self::Cancelled | Self::NameExhausted(_) => return None,
        };

        tracing::debug!("{}", self);

        Some(
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: message.to_string(),
                }),
            )
                .into_response(),
        )
    }
}

/// Output format requested from a report endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Preview,
    Excel,
    PowerPoint,
}

impl ReportFormat {
    /// Client-facing message returned when generation fails on the server side.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Preview => "Failed to generate report preview",
            Self::Excel => "Failed to generate Excel report",
            Self::PowerPoint => "Failed to generate PowerPoint presentation",
        }
    }
}

/// A failed report request, tagged with the endpoint's output format.
///
/// Validation failures keep their 400 response; every other failure is logged in full and
/// answered with the endpoint's fixed 500 message.
#[derive(Debug)]
pub struct ReportFailure {
    pub format: ReportFormat,
    pub error: super::Error,
}

impl ReportFailure {
    pub fn preview(error: super::Error) -> Self {
        Self {
            format: ReportFormat::Preview,
            error,
        }
    }

    pub fn excel(error: super::Error) -> Self {
        Self {
            format: ReportFormat::Excel,
            error,
        }
    }

    pub fn powerpoint(error: super::Error) -> Self {
        Self {
            format: ReportFormat::PowerPoint,
            error,
        }
    }
}

impl IntoResponse for ReportFailure {
    fn into_response(self) -> Response {
        if let super::Error::ReportError(err) = &self.error {
            if let Some(response) = err.validation_response() {
                return response;
            }
        }

        InternalServerError(self.error, self.format.failure_message()).into_response()
    }
}
