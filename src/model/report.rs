use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body accepted by every report endpoint.
///
/// All fields are optional at the deserialization level so that missing parameters are
/// reported with the API's own validation message rather than a JSON rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequestDto {
    /// Reporting period label, e.g. `Q3-2025`
    pub time_period: Option<String>,
    /// Team to scope the report to; omitted, empty, or `"all"` selects every team
    pub team_id: Option<TeamIdDto>,
    /// One of `detailed`, `summary`, or `highlights`
    pub report_type: Option<String>,
}

/// Team identifier as sent by clients, either a JSON number or a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum TeamIdDto {
    Number(i64),
    Text(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportPreviewResponseDto {
    pub success: bool,
    pub preview: ReportPreviewDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportUrlResponseDto {
    pub success: bool,
    /// Public path of the generated file, e.g. `/uploads/reports/okr_report_Q1_1700000000000.xlsx`
    pub report_url: String,
}

/// JSON projection of an aggregated report.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportPreviewDto {
    pub report_info: ReportInfoDto,
    pub summary: ReportSummaryDto,
    pub preview_data: PreviewDataDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportInfoDto {
    pub time_period: String,
    pub team_id: Option<String>,
    pub team_name: String,
    pub report_type: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummaryDto {
    pub total_objectives: usize,
    pub completed_objectives: usize,
    pub at_risk_objectives: usize,
    pub avg_progress: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewDataDto {
    /// Number of objectives in the full, untruncated set
    pub objectives_count: usize,
    pub objectives: Vec<ObjectivePreviewDto>,
    pub key_results: Vec<KeyResultPreviewDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectivePreviewDto {
    pub id: i32,
    pub title: String,
    pub progress: u32,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyResultPreviewDto {
    pub id: i32,
    pub title: String,
    pub progress: u32,
    pub is_completed: bool,
}
