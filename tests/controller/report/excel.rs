//! Tests for the excel_report endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use compass::{model::report::TeamIdDto, server::controller::report::excel_report};

use super::*;

/// Tests generating a detailed workbook for every team.
///
/// Verifies the returned URL points at a file in the reports directory containing all
/// three sheets and the company header.
///
/// Expected: 200 with success and the report URL
#[tokio::test]
async fn generates_detailed_workbook() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_report_tables().build().await?;
    test.okr().insert_company_settings(Some("Acme")).await?;
    let team = test.okr().insert_team("Engineering").await?;
    let objective = test
        .okr()
        .insert_mock_objective(Some(team.id), Some(75), Some("in-progress"))
        .await?;
    test.okr()
        .insert_mock_key_result(objective.id, Some(50), false)
        .await?;

    let response = excel_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), None, Some("detailed")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);

    let report_url = body["reportUrl"].as_str().unwrap();
    assert!(report_url.starts_with("/uploads/reports/okr_report_Q1-2025_"));
    assert!(report_url.ends_with(".xlsx"));

    let path = artifact_path(test.reports_dir(), report_url);
    assert!(path.exists());

    let workbook = read_zip_entry(&path, "xl/workbook.xml");
    assert!(workbook.contains("Objectives Overview"));
    assert!(workbook.contains("Key Results"));
    assert!(workbook.contains("Team Performance"));

    let strings = read_zip_entry(&path, "xl/sharedStrings.xml");
    assert!(strings.contains("Acme - OKR Report"));
    assert!(strings.contains("Key Result"));
    assert!(strings.contains("Engineering"));

    Ok(())
}

/// Tests that a summary workbook omits the key results sheet.
///
/// Expected: 200 with a workbook containing the objectives and team performance sheets
#[tokio::test]
async fn summary_workbook_omits_key_results() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_report_tables().build().await?;
    let team = test.okr().insert_team("Engineering").await?;
    test.okr()
        .insert_mock_objective(Some(team.id), Some(20), None)
        .await?;

    let response = excel_report(
        State(test.into_app_state()),
        request(Some("Q2-2025"), Some(TeamIdDto::Number(team.id as i64)), Some("summary")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let path = artifact_path(test.reports_dir(), body["reportUrl"].as_str().unwrap());

    let workbook = read_zip_entry(&path, "xl/workbook.xml");
    assert!(workbook.contains("Objectives Overview"));
    assert!(workbook.contains("Team Performance"));
    assert!(!workbook.contains("Key Results"));

    Ok(())
}

/// Tests that identical requests never overwrite each other's file.
///
/// Expected: two distinct URLs, both files present
#[tokio::test]
async fn repeated_requests_produce_distinct_files() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let state = test.into_app_state();

    let mut urls = Vec::new();
    for _ in 0..2 {
        let response = excel_report(
            State(state.clone()),
            request(Some("Q1-2025"), None, Some("highlights")),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        urls.push(body["reportUrl"].as_str().unwrap().to_string());
    }

    assert_ne!(urls[0], urls[1]);
    for url in &urls {
        assert!(artifact_path(test.reports_dir(), url).exists());
    }

    Ok(())
}

/// Tests rejection of a request missing its report type.
///
/// Expected: 400 with "Missing required parameters" and no file written
#[tokio::test]
async fn returns_400_when_report_type_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let response = excel_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), None, None),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Missing required parameters");
    assert_eq!(std::fs::read_dir(test.reports_dir()).unwrap().count(), 0);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: 500 with the Excel failure message
#[tokio::test]
async fn returns_500_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = excel_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), None, Some("detailed")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Failed to generate Excel report");

    Ok(())
}
