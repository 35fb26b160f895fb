//! Aggregation rules shared by the preview, Excel and PowerPoint projections.

use std::cmp::Reverse;

use crate::server::model::{
    db::{KeyResultModel, ObjectiveModel},
    report::{ObjectiveReport, ReportSummary},
};

/// Status shown for objectives whose status is absent or empty.
pub static DEFAULT_STATUS: &str = "Not Started";

/// Classification of an objective's free-text status for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    Completed,
    AtRisk,
    /// Any other value, including none; counted toward neither bucket
    Other,
}

impl StatusClass {
    pub fn of(status: Option<&str>) -> Self {
        match status {
            Some("completed") => Self::Completed,
            Some("at-risk") => Self::AtRisk,
            _ => Self::Other,
        }
    }
}

/// Progress as a percentage in `0..=100`, treating a missing value as 0.
pub fn progress_percent(progress: Option<i32>) -> u32 {
    progress.unwrap_or(0).clamp(0, 100).unsigned_abs()
}

/// Status text for display, [`DEFAULT_STATUS`] when absent or empty.
pub fn display_status(status: Option<&str>) -> &str {
    status
        .filter(|status| !status.is_empty())
        .unwrap_or(DEFAULT_STATUS)
}

/// `numerator / denominator` rounded half up, 0 when the denominator is 0.
pub fn rounded_ratio(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }

    let rounded = (numerator * 2 + denominator) / (denominator * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Computes the four summary statistics over an objective set.
pub fn summarize<'a>(objectives: impl IntoIterator<Item = &'a ObjectiveModel>) -> ReportSummary {
    let mut summary = ReportSummary::default();
    let mut progress_sum: u64 = 0;

    for objective in objectives {
        summary.total_objectives += 1;
        progress_sum += u64::from(progress_percent(objective.progress));

        match StatusClass::of(objective.status.as_deref()) {
            StatusClass::Completed => summary.completed_objectives += 1,
            StatusClass::AtRisk => summary.at_risk_objectives += 1,
            StatusClass::Other => {}
        }
    }

    summary.avg_progress = rounded_ratio(progress_sum, summary.total_objectives as u64);
    summary
}

/// Percentage of objectives completed, rounded, 0 when there are no objectives.
pub fn completion_rate(summary: &ReportSummary) -> u32 {
    rounded_ratio(
        summary.completed_objectives as u64 * 100,
        summary.total_objectives as u64,
    )
}

/// Objectives ordered by progress, highest first, ties keeping their original order.
pub fn rank_by_progress(objectives: &[ObjectiveReport], limit: Option<usize>) -> Vec<&ObjectiveReport> {
    let mut ranked: Vec<&ObjectiveReport> = objectives.iter().collect();
    // sort_by_key is stable
    ranked.sort_by_key(|entry| Reverse(progress_percent(entry.objective.progress)));

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    ranked
}

/// Completed key results across all objectives in iteration order.
pub fn completed_key_results(objectives: &[ObjectiveReport], limit: usize) -> Vec<&KeyResultModel> {
    objectives
        .iter()
        .flat_map(|entry| entry.key_results.iter())
        .filter(|key_result| key_result.is_completed)
        .take(limit)
        .collect()
}

/// Objectives that have started but are not finished (`0 < progress < 100`).
pub fn in_progress_objectives(objectives: &[ObjectiveReport], limit: usize) -> Vec<&ObjectiveModel> {
    objectives
        .iter()
        .map(|entry| &entry.objective)
        .filter(|objective| {
            let progress = progress_percent(objective.progress);
            progress > 0 && progress < 100
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use compass_test_utils::fixtures::okr::factory;

    use crate::server::{
        model::{
            db::ObjectiveModel,
            report::{ObjectiveReport, ReportSummary},
        },
        report::statistics::*,
    };

    fn objectives_with_progress(progress: &[Option<i32>]) -> Vec<ObjectiveModel> {
        progress
            .iter()
            .enumerate()
            .map(|(i, p)| factory::mock_objective_model(i as i32 + 1, None, *p, None))
            .collect()
    }

    fn reports(objectives: Vec<ObjectiveModel>) -> Vec<ObjectiveReport> {
        objectives
            .into_iter()
            .map(|objective| ObjectiveReport {
                objective,
                key_results: Vec::new(),
            })
            .collect()
    }

    /// Expect zeroed statistics for an empty objective set
    #[test]
    fn empty_set_is_all_zero() {
        let summary = summarize(&Vec::<ObjectiveModel>::new());

        assert_eq!(summary, ReportSummary::default());
        assert_eq!(completion_rate(&summary), 0);
    }

    /// Expect the mean of [0, 50, 100] to be 50
    #[test]
    fn averages_progress() {
        let objectives = objectives_with_progress(&[Some(0), Some(50), Some(100)]);

        assert_eq!(summarize(&objectives).avg_progress, 50);
    }

    /// Expect the mean of [33, 34] (33.5) to round half up to 34
    #[test]
    fn rounds_half_up() {
        let objectives = objectives_with_progress(&[Some(33), Some(34)]);

        assert_eq!(summarize(&objectives).avg_progress, 34);
    }

    /// Expect missing progress to count as 0 and out-of-range values to be clamped
    #[test]
    fn treats_missing_progress_as_zero() {
        let objectives = objectives_with_progress(&[None, Some(80), Some(-20), Some(250)]);

        // (0 + 80 + 0 + 100) / 4 = 45
        assert_eq!(summarize(&objectives).avg_progress, 45);
    }

    /// Expect only the exact "completed" and "at-risk" sentinels to be counted
    #[test]
    fn counts_status_sentinels() {
        let objectives = vec![
            factory::mock_objective_model(1, None, Some(100), Some("completed")),
            factory::mock_objective_model(2, None, Some(10), Some("at-risk")),
            factory::mock_objective_model(3, None, Some(10), Some("at-risk")),
            factory::mock_objective_model(4, None, Some(50), Some("active")),
            factory::mock_objective_model(5, None, Some(90), Some("Completed")),
            factory::mock_objective_model(6, None, Some(0), None),
        ];

        let summary = summarize(&objectives);

        assert_eq!(summary.total_objectives, 6);
        assert_eq!(summary.completed_objectives, 1);
        assert_eq!(summary.at_risk_objectives, 2);
    }

    /// Expect completion rate to be rounded and guarded against division by zero
    #[test]
    fn computes_completion_rate() {
        let summary = ReportSummary {
            total_objectives: 3,
            completed_objectives: 2,
            at_risk_objectives: 0,
            avg_progress: 0,
        };

        assert_eq!(completion_rate(&summary), 67);
        assert_eq!(completion_rate(&ReportSummary::default()), 0);
    }

    /// Expect ranking to be descending, stable on ties, and capped when limited
    #[test]
    fn ranks_by_progress() {
        let entries = reports(objectives_with_progress(&[
            Some(10),
            Some(90),
            Some(40),
            Some(90),
            None,
            Some(70),
            Some(40),
            Some(5),
            Some(100),
            Some(60),
        ]));

        let ranked: Vec<i32> = rank_by_progress(&entries, Some(5))
            .iter()
            .map(|entry| entry.objective.id)
            .collect();
        assert_eq!(ranked, vec![9, 2, 4, 6, 10]);

        let all = rank_by_progress(&entries, None);
        assert_eq!(all.len(), 10);
        let ties: Vec<i32> = all
            .iter()
            .filter(|entry| entry.objective.progress == Some(40))
            .map(|entry| entry.objective.id)
            .collect();
        assert_eq!(ties, vec![3, 7]);
    }

    /// Expect completed key results to be collected across objectives up to the limit
    #[test]
    fn collects_completed_key_results() {
        let mut entries = reports(objectives_with_progress(&[Some(50), Some(50)]));
        entries[0].key_results = (1..=4)
            .map(|id| factory::mock_key_result_model(id, 1, Some(100), id % 2 == 1))
            .collect();
        entries[1].key_results = (5..=10)
            .map(|id| factory::mock_key_result_model(id, 2, Some(100), true))
            .collect();

        let ids: Vec<i32> = completed_key_results(&entries, 5)
            .iter()
            .map(|key_result| key_result.id)
            .collect();

        assert_eq!(ids, vec![1, 3, 5, 6, 7]);
    }

    /// Expect only objectives strictly between 0 and 100 to be in progress
    #[test]
    fn selects_in_progress_objectives() {
        let entries = reports(objectives_with_progress(&[
            Some(0),
            Some(100),
            Some(1),
            None,
            Some(99),
            Some(50),
            Some(20),
            Some(30),
        ]));

        let ids: Vec<i32> = in_progress_objectives(&entries, 4)
            .iter()
            .map(|objective| objective.id)
            .collect();

        assert_eq!(ids, vec![3, 5, 6, 7]);
    }

    /// Expect absent or empty status to display as "Not Started"
    #[test]
    fn defaults_display_status() {
        assert_eq!(display_status(None), "Not Started");
        assert_eq!(display_status(Some("")), "Not Started");
        assert_eq!(display_status(Some("active")), "active");
    }
}
