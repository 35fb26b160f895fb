//! Tests for the report endpoints.

mod excel;
mod powerpoint;
mod preview;

use std::{io::Read, path::Path};

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest},
    http::{header::CONTENT_TYPE, Request},
    response::Response,
    Json,
};
use compass::model::report::{ReportRequestDto, TeamIdDto};

use super::*;

/// Builds a request body as the handlers receive it after JSON extraction.
fn request(
    time_period: Option<&str>,
    team_id: Option<TeamIdDto>,
    report_type: Option<&str>,
) -> Result<Json<ReportRequestDto>, JsonRejection> {
    Ok(Json(ReportRequestDto {
        time_period: time_period.map(str::to_string),
        team_id,
        report_type: report_type.map(str::to_string),
    }))
}

/// Runs JSON extraction over a raw body, as axum would for an incoming request.
async fn raw_request(body: &'static str) -> Result<Json<ReportRequestDto>, JsonRejection> {
    let request = Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    Json::<ReportRequestDto>::from_request(request, &()).await
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Resolves a `/uploads/reports/<file>` URL to the file inside the test's reports directory.
fn artifact_path(reports_dir: &Path, report_url: &str) -> std::path::PathBuf {
    let file_name = report_url
        .strip_prefix("/uploads/reports/")
        .expect("report URL outside the reports prefix");

    reports_dir.join(file_name)
}

fn read_zip_entry(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();

    let mut body = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut body)
        .unwrap();
    body
}
