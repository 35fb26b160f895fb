pub use super::company_settings::Entity as CompanySettings;
pub use super::key_result::Entity as KeyResult;
pub use super::objective::Entity as Objective;
pub use super::okr_user::Entity as OkrUser;
pub use super::team::Entity as Team;
