//! Report filters and the aggregated dataset handed to output adapters.
//!
//! A request's filters are validated once into [`ReportFilters`]. The aggregation service
//! resolves them against storage exactly once, producing an immutable [`ReportDataset`] that
//! every adapter (preview, Excel, PowerPoint) renders without touching the database again.

use std::{collections::HashMap, fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::report::{ReportRequestDto, TeamIdDto},
    server::{
        error::report::ReportError,
        model::db::{KeyResultModel, ObjectiveModel, UserModel},
    },
};

/// Display name used when no owner can be resolved.
pub static UNASSIGNED_OWNER: &str = "N/A";

/// Kind of report requested, controlling which sections each adapter emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportType {
    Detailed,
    Summary,
    Highlights,
}

impl ReportType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Summary => "summary",
            Self::Highlights => "highlights",
        }
    }

    /// The Excel "Key Results" sheet is only produced for detailed reports.
    pub fn includes_key_results(self) -> bool {
        matches!(self, Self::Detailed)
    }

    /// The Excel "Team Performance" sheet is produced for summary and detailed reports.
    pub fn includes_team_performance(self) -> bool {
        matches!(self, Self::Summary | Self::Detailed)
    }

    /// The PowerPoint "Key Achievements" slide is produced for detailed and highlights reports.
    pub fn includes_achievements(self) -> bool {
        matches!(self, Self::Detailed | Self::Highlights)
    }

    /// Row cap for the ranked objectives table, `None` when uncapped.
    pub fn ranked_objective_limit(self) -> Option<usize> {
        match self {
            Self::Highlights => Some(5),
            Self::Detailed | Self::Summary => None,
        }
    }
}

impl FromStr for ReportType {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "detailed" => Ok(Self::Detailed),
            "summary" => Ok(Self::Summary),
            "highlights" => Ok(Self::Highlights),
            other => Err(ReportError::InvalidReportType(other.to_string())),
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which objectives a report covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamScope {
    /// Every objective in the system
    All,
    /// Objectives owned by the given team
    Team(i32),
    /// A team identifier that can never resolve, kept verbatim for echoing back
    Unresolvable(String),
}

impl TeamScope {
    /// Team identifier as echoed in the preview's report info.
    pub fn echo(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Team(id) => Some(id.to_string()),
            Self::Unresolvable(raw) => Some(raw.clone()),
        }
    }
}

impl From<Option<TeamIdDto>> for TeamScope {
    fn from(team_id: Option<TeamIdDto>) -> Self {
        match team_id {
            None => Self::All,
            Some(TeamIdDto::Number(id)) => match i32::try_from(id) {
                Ok(id) => Self::Team(id),
                Err(_) => Self::Unresolvable(id.to_string()),
            },
            Some(TeamIdDto::Text(raw)) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
                    Self::All
                } else {
                    match trimmed.parse::<i32>() {
                        Ok(id) => Self::Team(id),
                        Err(_) => Self::Unresolvable(raw),
                    }
                }
            }
        }
    }
}

/// Validated filters parameterizing every aggregation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportFilters {
    pub time_period: String,
    pub team_scope: TeamScope,
    pub report_type: ReportType,
}

impl TryFrom<ReportRequestDto> for ReportFilters {
    type Error = ReportError;

    fn try_from(request: ReportRequestDto) -> Result<Self, Self::Error> {
        let time_period = request
            .time_period
            .filter(|value| !value.trim().is_empty())
            .ok_or(ReportError::MissingParameters)?;
        let report_type = request
            .report_type
            .filter(|value| !value.trim().is_empty())
            .ok_or(ReportError::MissingParameters)?;

        Ok(Self {
            time_period,
            team_scope: TeamScope::from(request.team_id),
            report_type: report_type.trim().parse()?,
        })
    }
}

/// Summary statistics over the resolved objective set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_objectives: usize,
    pub completed_objectives: usize,
    pub at_risk_objectives: usize,
    /// Rounded mean progress, 0 for an empty set
    pub avg_progress: u32,
}

/// An objective together with every one of its key results.
#[derive(Clone, Debug)]
pub struct ObjectiveReport {
    pub objective: ObjectiveModel,
    pub key_results: Vec<KeyResultModel>,
}

/// One row of the global team comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamPerformance {
    pub team_id: i32,
    pub team_name: String,
    pub objective_count: usize,
    pub completed_count: usize,
    pub at_risk_count: usize,
    pub avg_progress: u32,
}

/// Resolved owner display names keyed by user ID.
#[derive(Clone, Debug, Default)]
pub struct OwnerDirectory {
    names: HashMap<i32, String>,
}

impl OwnerDirectory {
    pub fn from_users(users: impl IntoIterator<Item = UserModel>) -> Self {
        let names = users
            .into_iter()
            .map(|user| (user.id, owner_display_name(&user).to_string()))
            .collect();

        Self { names }
    }

    /// Display name for an owner reference, [`UNASSIGNED_OWNER`] when it doesn't resolve.
    pub fn display_name(&self, owner_id: Option<i32>) -> &str {
        owner_id
            .and_then(|id| self.names.get(&id))
            .map(String::as_str)
            .unwrap_or(UNASSIGNED_OWNER)
    }
}

/// Owner display fallback chain: full name, then username, then [`UNASSIGNED_OWNER`].
pub fn owner_display_name(user: &UserModel) -> &str {
    user.full_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .or_else(|| Some(user.username.as_str()).filter(|name| !name.trim().is_empty()))
        .unwrap_or(UNASSIGNED_OWNER)
}

/// Immutable result of aggregating one report request.
#[derive(Clone, Debug)]
pub struct ReportDataset {
    pub filters: ReportFilters,
    pub team_name: String,
    pub company_name: String,
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    /// Every resolved objective in storage order, untruncated
    pub objectives: Vec<ObjectiveReport>,
    pub owners: OwnerDirectory,
    /// Every team in the system, independent of the request's team filter
    pub team_performance: Vec<TeamPerformance>,
}
