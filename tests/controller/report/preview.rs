//! Tests for the preview_report endpoint.
//!
//! Verifies request validation, the preview body for scoped and unscoped requests, empty
//! objective sets, and the endpoint's error message on storage failures.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use compass::{model::report::TeamIdDto, server::controller::report::preview_report};

use super::*;

/// Tests rejection of requests without a time period.
///
/// Expected: 400 with "Missing required parameters"
#[tokio::test]
async fn returns_400_when_time_period_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let response = preview_report(
        State(test.into_app_state()),
        request(None, None, Some("summary")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Missing required parameters");

    Ok(())
}

/// Tests rejection of requests with an empty report type.
///
/// Expected: 400 with "Missing required parameters"
#[tokio::test]
async fn returns_400_when_report_type_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let response = preview_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), None, Some("")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Missing required parameters");

    Ok(())
}

/// Tests rejection of unsupported report types.
///
/// Expected: 400 with "Invalid report type"
#[tokio::test]
async fn returns_400_for_invalid_report_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let response = preview_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), None, Some("weekly")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Invalid report type");

    Ok(())
}

/// Tests rejection of a body that isn't valid JSON.
///
/// Expected: 400 with "Missing required parameters"
#[tokio::test]
async fn returns_400_for_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let response = preview_report(State(test.into_app_state()), raw_request("{not json").await)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Missing required parameters");

    Ok(())
}

/// Tests a preview scoped to one team given as a numeric string.
///
/// Verifies that only the team's objectives are counted, the lists are truncated to three,
/// and key results come from the first objective.
///
/// Expected: 200 with success and the preview body
#[tokio::test]
async fn previews_team_report() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_report_tables().build().await?;
    let engineering = test.okr().insert_team("Engineering").await?;
    let sales = test.okr().insert_team("Sales").await?;

    let first = test
        .okr()
        .insert_mock_objective(Some(engineering.id), Some(100), Some("completed"))
        .await?;
    for (progress, status) in [(Some(40), Some("at-risk")), (None, None), (Some(60), None)] {
        test.okr()
            .insert_mock_objective(Some(engineering.id), progress, status)
            .await?;
    }
    test.okr()
        .insert_mock_objective(Some(sales.id), Some(90), Some("completed"))
        .await?;
    for _ in 0..4 {
        test.okr()
            .insert_mock_key_result(first.id, Some(100), true)
            .await?;
    }

    let response = preview_report(
        State(test.into_app_state()),
        request(
            Some("Q1-2025"),
            Some(TeamIdDto::Text(engineering.id.to_string())),
            Some("detailed"),
        ),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);

    let preview = &body["preview"];
    assert_eq!(preview["reportInfo"]["timePeriod"], "Q1-2025");
    assert_eq!(preview["reportInfo"]["teamId"], engineering.id.to_string());
    assert_eq!(preview["reportInfo"]["teamName"], "Engineering");
    assert_eq!(preview["reportInfo"]["reportType"], "detailed");

    assert_eq!(preview["summary"]["totalObjectives"], 4);
    assert_eq!(preview["summary"]["completedObjectives"], 1);
    assert_eq!(preview["summary"]["atRiskObjectives"], 1);
    // (100 + 40 + 0 + 60) / 4
    assert_eq!(preview["summary"]["avgProgress"], 50);

    assert_eq!(preview["previewData"]["objectivesCount"], 4);
    let objectives = preview["previewData"]["objectives"].as_array().unwrap();
    assert_eq!(objectives.len(), 3);
    assert_eq!(objectives[0]["id"], first.id);
    assert_eq!(objectives[2]["status"], "Not Started");
    assert_eq!(objectives[2]["progress"], 0);

    let key_results = preview["previewData"]["keyResults"].as_array().unwrap();
    assert_eq!(key_results.len(), 3);
    assert_eq!(key_results[0]["isCompleted"], true);

    Ok(())
}

/// Tests a preview over an empty system.
///
/// Expected: 200 with zeroed statistics and empty lists
#[tokio::test]
async fn previews_empty_set() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let response = preview_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), Some(TeamIdDto::Text("all".to_string())), Some("summary")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let preview = &body["preview"];
    assert_eq!(preview["reportInfo"]["teamName"], "All Teams");
    assert!(preview["reportInfo"]["teamId"].is_null());
    assert_eq!(preview["summary"]["totalObjectives"], 0);
    assert_eq!(preview["summary"]["avgProgress"], 0);
    assert_eq!(preview["previewData"]["objectivesCount"], 0);
    assert!(preview["previewData"]["objectives"]
        .as_array()
        .unwrap()
        .is_empty());
    assert!(preview["previewData"]["keyResults"]
        .as_array()
        .unwrap()
        .is_empty());

    Ok(())
}

/// Tests a preview for a team identifier that can never resolve.
///
/// Expected: 200 with "Unknown Team" and no objectives
#[tokio::test]
async fn previews_unknown_team() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_report_tables().build().await?;
    test.okr().insert_mock_objective(None, Some(50), None).await?;

    let response = preview_report(
        State(test.into_app_state()),
        request(
            Some("Q1-2025"),
            Some(TeamIdDto::Text("marketing".to_string())),
            Some("highlights"),
        ),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["preview"]["reportInfo"]["teamName"], "Unknown Team");
    assert_eq!(body["preview"]["reportInfo"]["teamId"], "marketing");
    assert_eq!(body["preview"]["summary"]["totalObjectives"], 0);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: 500 with the preview failure message
#[tokio::test]
async fn returns_500_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = preview_report(
        State(test.into_app_state()),
        request(Some("Q1-2025"), None, Some("summary")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Failed to generate report preview");

    Ok(())
}
