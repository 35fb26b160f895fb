use std::{
    collections::{BTreeSet, HashMap},
    time::Duration,
};

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_util::sync::CancellationToken;

use crate::{
    model::report::ReportPreviewDto,
    server::{
        data::{
            company_settings::CompanySettingsRepository, key_result::KeyResultRepository,
            objective::ObjectiveRepository, team::TeamRepository, user::UserRepository,
        },
        error::{report::ReportError, Error},
        model::{
            db::{KeyResultModel, ObjectiveModel, TeamModel},
            report::{
                ObjectiveReport, OwnerDirectory, ReportDataset, ReportFilters, TeamPerformance,
                TeamScope,
            },
        },
        report::{
            artifact::{ArtifactKind, ArtifactStore, GeneratedArtifact},
            excel, powerpoint, preview,
            statistics::summarize,
        },
    },
};

pub static ALL_TEAMS: &str = "All Teams";
pub static UNKNOWN_TEAM: &str = "Unknown Team";
pub static DEFAULT_COMPANY_NAME: &str = "Company";

/// Service aggregating OKR data into report datasets and rendering them.
///
/// Each request is aggregated exactly once; the resulting [`ReportDataset`] is handed to a
/// single output adapter.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves filters against storage into an immutable dataset.
    ///
    /// An unknown or unresolvable team yields an empty objective set named
    /// [`UNKNOWN_TEAM`] rather than an error.
    ///
    /// # Returns
    /// - `Ok(ReportDataset)` - Objectives with their key results, statistics, owners and the
    ///   global team comparison
    /// - `Err(Error::DbErr)` - A storage query failed
    pub async fn aggregate(&self, filters: ReportFilters) -> Result<ReportDataset, Error> {
        let objective_repo = ObjectiveRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);

        let (objectives, team_name) = match &filters.team_scope {
            TeamScope::All => (objective_repo.get_all().await?, ALL_TEAMS.to_string()),
            TeamScope::Team(team_id) => {
                let team_name = team_repo
                    .get_by_id(*team_id)
                    .await?
                    .map(|team| team.name)
                    .unwrap_or_else(|| UNKNOWN_TEAM.to_string());

                (objective_repo.get_by_team_id(*team_id).await?, team_name)
            }
            TeamScope::Unresolvable(_) => (Vec::new(), UNKNOWN_TEAM.to_string()),
        };

        let company_name = CompanySettingsRepository::new(self.db)
            .get()
            .await?
            .and_then(|settings| settings.company_name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string());

        let objective_ids: Vec<i32> = objectives.iter().map(|objective| objective.id).collect();
        let key_results = KeyResultRepository::new(self.db)
            .get_by_objective_ids(&objective_ids)
            .await?;

        let owner_ids: Vec<i32> = objectives
            .iter()
            .filter_map(|objective| objective.owner_id)
            .chain(key_results.iter().filter_map(|key_result| key_result.owner_id))
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .collect();
        let owners =
            OwnerDirectory::from_users(UserRepository::new(self.db).get_many(&owner_ids).await?);

        let teams = team_repo.get_all().await?;
        let team_performance = match filters.team_scope {
            TeamScope::All => team_performance(&teams, &objectives),
            TeamScope::Team(_) | TeamScope::Unresolvable(_) => {
                team_performance(&teams, &objective_repo.get_all().await?)
            }
        };

        let summary = summarize(&objectives);
        let objectives = attach_key_results(objectives, key_results);

        Ok(ReportDataset {
            filters,
            team_name,
            company_name,
            generated_at: Utc::now(),
            summary,
            objectives,
            owners,
            team_performance,
        })
    }

    /// Aggregates and projects the JSON preview.
    pub async fn preview(&self, filters: ReportFilters) -> Result<ReportPreviewDto, Error> {
        let dataset = self.aggregate(filters).await?;

        Ok(preview::build_preview(&dataset))
    }

    /// Aggregates, renders and persists an Excel workbook.
    ///
    /// Rendering runs on the blocking thread pool and is abandoned, without writing a file,
    /// once `timeout` elapses.
    pub async fn generate_excel(
        &self,
        filters: ReportFilters,
        artifacts: &ArtifactStore,
        timeout: Duration,
    ) -> Result<GeneratedArtifact, Error> {
        let dataset = self.aggregate(filters).await?;
        let objective_count = dataset.objectives.len();
        let artifacts = artifacts.clone();

        let artifact = run_bounded(timeout, move |cancel| {
            let sheets = excel::build_workbook(&dataset);
            let bytes = excel::render_workbook(&sheets, cancel)?;

            artifacts.persist(
                ArtifactKind::Workbook,
                &dataset.filters.time_period,
                &bytes,
                cancel,
            )
        })
        .await?;

        tracing::info!(
            objectives = objective_count,
            "Generated Excel report {}",
            artifact.path.display()
        );

        Ok(artifact)
    }

    /// Aggregates, renders and persists a PowerPoint deck.
    ///
    /// Same execution and timeout semantics as [`Self::generate_excel`].
    pub async fn generate_powerpoint(
        &self,
        filters: ReportFilters,
        artifacts: &ArtifactStore,
        timeout: Duration,
    ) -> Result<GeneratedArtifact, Error> {
        let dataset = self.aggregate(filters).await?;
        let objective_count = dataset.objectives.len();
        let artifacts = artifacts.clone();

        let artifact = run_bounded(timeout, move |cancel| {
            let slides = powerpoint::build_deck(&dataset);
            let bytes = powerpoint::render_deck(&slides, cancel)?;

            artifacts.persist(
                ArtifactKind::Presentation,
                &dataset.filters.time_period,
                &bytes,
                cancel,
            )
        })
        .await?;

        tracing::info!(
            objectives = objective_count,
            "Generated PowerPoint presentation {}",
            artifact.path.display()
        );

        Ok(artifact)
    }
}

/// Pairs each objective with its key results, keeping both in storage order.
fn attach_key_results(
    objectives: Vec<ObjectiveModel>,
    key_results: Vec<KeyResultModel>,
) -> Vec<ObjectiveReport> {
    let mut by_objective: HashMap<i32, Vec<KeyResultModel>> = HashMap::new();
    for key_result in key_results {
        by_objective
            .entry(key_result.objective_id)
            .or_default()
            .push(key_result);
    }

    objectives
        .into_iter()
        .map(|objective| ObjectiveReport {
            key_results: by_objective.remove(&objective.id).unwrap_or_default(),
            objective,
        })
        .collect()
}

/// Per-team statistics over every objective in the system.
fn team_performance(teams: &[TeamModel], objectives: &[ObjectiveModel]) -> Vec<TeamPerformance> {
    teams
        .iter()
        .map(|team| {
            let summary = summarize(
                objectives
                    .iter()
                    .filter(|objective| objective.team_id == Some(team.id)),
            );

            TeamPerformance {
                team_id: team.id,
                team_name: team.name.clone(),
                objective_count: summary.total_objectives,
                completed_count: summary.completed_objectives,
                at_risk_count: summary.at_risk_objectives,
                avg_progress: summary.avg_progress,
            }
        })
        .collect()
}

/// Runs blocking report work with an upper bound on its duration.
///
/// `work` receives a token that is cancelled when `timeout` elapses; it is expected to
/// check the token between units of work and before writing anything to disk.
pub(crate) async fn run_bounded<T, F>(timeout: Duration, work: F) -> Result<T, Error>
where
    T: Send + 'static,
    F: FnOnce(&CancellationToken) -> Result<T, Error> + Send + 'static,
{
    let cancel = CancellationToken::new();
    let task = tokio::task::spawn_blocking({
        let cancel = cancel.clone();
        move || work(&cancel)
    });

    match tokio::time::timeout(timeout, task).await {
        Ok(joined) => joined?,
        Err(_) => {
            cancel.cancel();

            Err(ReportError::TimedOut(timeout).into())
        }
    }
}
