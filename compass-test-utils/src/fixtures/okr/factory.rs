//! Factory functions for generating mock OKR database models.
//!
//! These are in-memory model instances with standard test values that don't require
//! database interaction. Titles are derived from the ID (`Objective 3`, `Key Result 7`) so
//! assertions can refer to them.

use chrono::{NaiveDate, NaiveDateTime, Utc};

use crate::model::{KeyResultModel, ObjectiveModel, TeamModel, UserModel};

fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap()
}

/// Create a mock objective database model for testing.
///
/// The objective runs from 2025-01-01 to 2025-03-31 with no owner.
///
/// # Arguments
/// - `id` - Objective ID, also used in the title
/// - `team_id` - Owning team, `None` for company-wide objectives
/// - `progress` - Completion percentage, may be absent
/// - `status` - Free-text status, may be absent
pub fn mock_objective_model(
    id: i32,
    team_id: Option<i32>,
    progress: Option<i32>,
    status: Option<&str>,
) -> ObjectiveModel {
    ObjectiveModel {
        id,
        title: format!("Objective {}", id),
        description: Some(format!("Description for objective {}", id)),
        progress,
        team_id,
        owner_id: None,
        is_company_objective: team_id.is_none(),
        start_date: date(2025, 1, 1),
        end_date: date(2025, 3, 31),
        status: status.map(str::to_string),
        priority: "medium".to_string(),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock key result database model for testing.
///
/// Target and current values are unset and there is no owner.
///
/// # Arguments
/// - `id` - Key result ID, also used in the title
/// - `objective_id` - Parent objective ID
/// - `progress` - Completion percentage, may be absent
/// - `is_completed` - Completion flag
pub fn mock_key_result_model(
    id: i32,
    objective_id: i32,
    progress: Option<i32>,
    is_completed: bool,
) -> KeyResultModel {
    KeyResultModel {
        id,
        title: format!("Key Result {}", id),
        objective_id,
        progress,
        target_value: None,
        current_value: None,
        owner_id: None,
        is_completed,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock user database model for testing.
pub fn mock_user_model(id: i32, username: &str, full_name: Option<&str>) -> UserModel {
    UserModel {
        id,
        username: username.to_string(),
        full_name: full_name.map(str::to_string),
        email: Some(format!("{}@example.com", username)),
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock team database model for testing.
pub fn mock_team_model(id: i32, name: &str) -> TeamModel {
    TeamModel {
        id,
        name: name.to_string(),
        description: None,
        created_at: Utc::now().naive_utc(),
    }
}
