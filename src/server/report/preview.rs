//! JSON preview projection of an aggregated report.

use crate::{
    model::report::{
        KeyResultPreviewDto, ObjectivePreviewDto, PreviewDataDto, ReportInfoDto,
        ReportPreviewDto, ReportSummaryDto,
    },
    server::{
        model::report::{ReportDataset, ReportSummary},
        report::statistics::{display_status, progress_percent},
    },
};

/// Number of objectives included in the preview list.
pub const PREVIEW_OBJECTIVE_LIMIT: usize = 3;
/// Number of key results of the first objective included in the preview list.
pub const PREVIEW_KEY_RESULT_LIMIT: usize = 3;

impl From<ReportSummary> for ReportSummaryDto {
    fn from(summary: ReportSummary) -> Self {
        Self {
            total_objectives: summary.total_objectives,
            completed_objectives: summary.completed_objectives,
            at_risk_objectives: summary.at_risk_objectives,
            avg_progress: summary.avg_progress,
        }
    }
}

/// Builds the preview for a dataset.
///
/// Objectives are truncated to [`PREVIEW_OBJECTIVE_LIMIT`] in their original order while
/// `objectives_count` reports the full count. Key results come only from the first objective
/// of the untruncated set.
pub fn build_preview(dataset: &ReportDataset) -> ReportPreviewDto {
    let objectives = dataset
        .objectives
        .iter()
        .take(PREVIEW_OBJECTIVE_LIMIT)
        .map(|entry| ObjectivePreviewDto {
            id: entry.objective.id,
            title: entry.objective.title.clone(),
            progress: progress_percent(entry.objective.progress),
            status: display_status(entry.objective.status.as_deref()).to_string(),
        })
        .collect();

    let key_results = dataset
        .objectives
        .first()
        .map(|entry| {
            entry
                .key_results
                .iter()
                .take(PREVIEW_KEY_RESULT_LIMIT)
                .map(|key_result| KeyResultPreviewDto {
                    id: key_result.id,
                    title: key_result.title.clone(),
                    progress: progress_percent(key_result.progress),
                    is_completed: key_result.is_completed,
                })
                .collect()
        })
        .unwrap_or_default();

    ReportPreviewDto {
        report_info: ReportInfoDto {
            time_period: dataset.filters.time_period.clone(),
            team_id: dataset.filters.team_scope.echo(),
            team_name: dataset.team_name.clone(),
            report_type: dataset.filters.report_type.to_string(),
            generated_at: dataset.generated_at,
        },
        summary: dataset.summary.into(),
        preview_data: PreviewDataDto {
            objectives_count: dataset.objectives.len(),
            objectives,
            key_results,
        },
    }
}
