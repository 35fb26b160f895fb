//! Tests for the powerpoint_report endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use compass::server::controller::report::powerpoint_report;

use super::*;

fn slide_count(path: &Path) -> usize {
    let file = std::fs::File::open(path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();

    archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .count()
}

/// Tests generating a highlights deck.
///
/// Verifies the deck has every slide including achievements, and that the ranked objectives
/// table is capped at five rows below its header.
///
/// Expected: 200 with success and the report URL
#[tokio::test]
async fn generates_highlights_deck() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_report_tables().build().await?;
    let team = test.okr().insert_team("Engineering").await?;
    for progress in [10, 20, 30, 40, 50, 60, 70] {
        test.okr()
            .insert_mock_objective(Some(team.id), Some(progress), Some("in-progress"))
            .await?;
    }

    let response = powerpoint_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), None, Some("highlights")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);

    let report_url = body["reportUrl"].as_str().unwrap();
    assert!(report_url.starts_with("/uploads/reports/okr_presentation_Q1-2025_"));
    assert!(report_url.ends_with(".pptx"));

    let path = artifact_path(test.reports_dir(), report_url);
    assert_eq!(slide_count(&path), 5);

    let title = read_zip_entry(&path, "ppt/slides/slide1.xml");
    assert!(title.contains("OKR Report - Q1-2025"));

    let overview = read_zip_entry(&path, "ppt/slides/slide3.xml");
    assert_eq!(overview.matches("<a:tr ").count(), 6);
    assert!(overview.contains("70%"));
    assert!(!overview.contains("10%"));

    Ok(())
}

/// Tests that a summary deck omits the achievements slide and, for an empty objective set,
/// renders a header-only objectives table and the planning placeholder.
///
/// Expected: 200 with a four slide deck
#[tokio::test]
async fn summary_deck_for_empty_set() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let response = powerpoint_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), None, Some("summary")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let path = artifact_path(test.reports_dir(), body["reportUrl"].as_str().unwrap());
    assert_eq!(slide_count(&path), 4);

    let overview = read_zip_entry(&path, "ppt/slides/slide3.xml");
    assert_eq!(overview.matches("<a:tr ").count(), 1);
    assert!(overview.contains("Objective"));

    let planning = read_zip_entry(&path, "ppt/slides/slide4.xml");
    assert!(planning.contains("No objectives currently in progress"));

    Ok(())
}

/// Tests rejection of unsupported report types.
///
/// Expected: 400 with "Invalid report type"
#[tokio::test]
async fn returns_400_for_invalid_report_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let response = powerpoint_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), None, Some("quarterly")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Invalid report type");

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: 500 with the PowerPoint failure message
#[tokio::test]
async fn returns_500_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = powerpoint_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), None, Some("highlights")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Failed to generate PowerPoint presentation");

    Ok(())
}
