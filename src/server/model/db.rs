//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so that services and adapters don't import from the
//! `entity` crate directly.

/// Type alias for the objective database model.
///
/// # Fields (from `entity::objective::Model`)
/// - `id` - Primary key
/// - `title` / `description` - Display text
/// - `progress` - Completion percentage (0-100), nullable
/// - `team_id` - Owning team (nullable for company-wide objectives)
/// - `owner_id` - Responsible user (nullable)
/// - `status` - Free-text status such as `completed` or `at-risk` (nullable)
/// - `start_date` / `end_date` - Planned date range
pub type ObjectiveModel = entity::objective::Model;

/// Type alias for the key result database model.
///
/// Each key result belongs to exactly one objective through `objective_id`.
pub type KeyResultModel = entity::key_result::Model;

/// Type alias for the team database model.
pub type TeamModel = entity::team::Model;

/// Type alias for the user database model, used for owner name resolution.
pub type UserModel = entity::okr_user::Model;

/// Type alias for the company settings singleton.
pub type CompanySettingsModel = entity::company_settings::Model;
