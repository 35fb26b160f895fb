//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's API routes and generates OpenAPI documentation
//! using utoipa. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with every report endpoint and Swagger UI.
///
/// # Registered Endpoints
/// - `POST /api/reports/preview` - JSON preview of a report
/// - `POST /api/reports/excel` - Generate an Excel workbook, returns its public URL
/// - `POST /api/reports/powerpoint` - Generate a PowerPoint deck, returns its public URL
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// Generated files are not served by this router; mount the reports directory under
/// [`REPORTS_URL_PREFIX`](crate::server::report::artifact::REPORTS_URL_PREFIX) separately.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Compass", description = "Compass OKR reporting API"), tags(
        (name = controller::report::REPORT_TAG, description = "Report generation API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::report::preview_report))
        .routes(routes!(controller::report::excel_report))
        .routes(routes!(controller::report::powerpoint_report))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
