//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main compass crate so fixtures and tests read the same.

pub type ObjectiveModel = entity::objective::Model;

pub type KeyResultModel = entity::key_result::Model;

pub type TeamModel = entity::team::Model;

pub type UserModel = entity::okr_user::Model;

pub type CompanySettingsModel = entity::company_settings::Model;
