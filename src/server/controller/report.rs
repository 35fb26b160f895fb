use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        report::{ReportPreviewResponseDto, ReportRequestDto, ReportUrlResponseDto},
    },
    server::{
        error::{
            report::{ReportError, ReportFailure},
            Error,
        },
        model::{app::AppState, report::ReportFilters},
        service::report::ReportService,
    },
};

pub static REPORT_TAG: &str = "report";

/// Validates a request body into report filters.
///
/// A body that isn't a JSON object with the expected field types is treated the same as
/// one missing its required fields.
fn parse_filters(
    payload: Result<Json<ReportRequestDto>, JsonRejection>,
) -> Result<ReportFilters, Error> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected report request body: {}", rejection);

        ReportError::MissingParameters
    })?;

    Ok(ReportFilters::try_from(request)?)
}

/// Preview the statistics and first entries of a report
#[utoipa::path(
    post,
    path = "/api/reports/preview",
    tag = REPORT_TAG,
    request_body = ReportRequestDto,
    responses(
        (status = 200, description = "Success when building the report preview", body = ReportPreviewResponseDto),
        (status = 400, description = "Missing required parameters or invalid report type", body = ErrorDto),
        (status = 500, description = "Failed to generate report preview", body = ErrorDto)
    ),
)]
pub async fn preview_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, ReportFailure> {
    let filters = parse_filters(payload).map_err(ReportFailure::preview)?;

    let preview = ReportService::new(&state.db)
        .preview(filters)
        .await
        .map_err(ReportFailure::preview)?;

    Ok((
        StatusCode::OK,
        Json(ReportPreviewResponseDto {
            success: true,
            preview,
        }),
    ))
}

/// Generate an Excel workbook for a report
#[utoipa::path(
    post,
    path = "/api/reports/excel",
    tag = REPORT_TAG,
    request_body = ReportRequestDto,
    responses(
        (status = 200, description = "Success when generating the workbook", body = ReportUrlResponseDto),
        (status = 400, description = "Missing required parameters or invalid report type", body = ErrorDto),
        (status = 500, description = "Failed to generate Excel report", body = ErrorDto)
    ),
)]
pub async fn excel_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, ReportFailure> {
    let filters = parse_filters(payload).map_err(ReportFailure::excel)?;

    let artifact = ReportService::new(&state.db)
        .generate_excel(filters, &state.artifacts, state.report_timeout)
        .await
        .map_err(ReportFailure::excel)?;

    Ok((
        StatusCode::OK,
        Json(ReportUrlResponseDto {
            success: true,
            report_url: artifact.url,
        }),
    ))
}

/// Generate a PowerPoint presentation for a report
#[utoipa::path(
    post,
    path = "/api/reports/powerpoint",
    tag = REPORT_TAG,
    request_body = ReportRequestDto,
    responses(
        (status = 200, description = "Success when generating the presentation", body = ReportUrlResponseDto),
        (status = 400, description = "Missing required parameters or invalid report type", body = ErrorDto),
        (status = 500, description = "Failed to generate PowerPoint presentation", body = ErrorDto)
    ),
)]
pub async fn powerpoint_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, ReportFailure> {
    let filters = parse_filters(payload).map_err(ReportFailure::powerpoint)?;

    let artifact = ReportService::new(&state.db)
        .generate_powerpoint(filters, &state.artifacts, state.report_timeout)
        .await
        .map_err(ReportFailure::powerpoint)?;

    Ok((
        StatusCode::OK,
        Json(ReportUrlResponseDto {
            success: true,
            report_url: artifact.url,
        }),
    ))
}
