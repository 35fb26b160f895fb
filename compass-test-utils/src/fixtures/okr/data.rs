//! OKR database insertion utilities.
//!
//! Records are inserted with database-assigned IDs; use the returned models to refer to
//! them. Parent records (teams, users, objectives) are not created automatically, so insert
//! them first when a test relies on the relationship.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::okr::{factory, OkrFixtures},
    model::{CompanySettingsModel, KeyResultModel, ObjectiveModel, TeamModel, UserModel},
};

impl<'a> OkrFixtures<'a> {
    /// Insert a team with the given name.
    pub async fn insert_team(&self, name: &str) -> Result<TeamModel, TestError> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(team.insert(&self.context.db).await?)
    }

    /// Insert a user with the given username and optional full name.
    pub async fn insert_user(
        &self,
        username: &str,
        full_name: Option<&str>,
    ) -> Result<UserModel, TestError> {
        let user = entity::okr_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            full_name: ActiveValue::Set(full_name.map(str::to_string)),
            email: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.context.db).await?)
    }

    /// Insert an objective from a model, typically built with
    /// [`factory::mock_objective_model`].
    ///
    /// The model's `id` is ignored and assigned by the database.
    pub async fn insert_objective(
        &self,
        objective: ObjectiveModel,
    ) -> Result<ObjectiveModel, TestError> {
        let mut objective = objective.into_active_model().reset_all();
        objective.id = ActiveValue::NotSet;

        Ok(objective.insert(&self.context.db).await?)
    }

    /// Insert a mock objective for a team with the given progress and status.
    pub async fn insert_mock_objective(
        &self,
        team_id: Option<i32>,
        progress: Option<i32>,
        status: Option<&str>,
    ) -> Result<ObjectiveModel, TestError> {
        self.insert_objective(factory::mock_objective_model(0, team_id, progress, status))
            .await
    }

    /// Insert a key result from a model, typically built with
    /// [`factory::mock_key_result_model`].
    ///
    /// The model's `id` is ignored and assigned by the database.
    pub async fn insert_key_result(
        &self,
        key_result: KeyResultModel,
    ) -> Result<KeyResultModel, TestError> {
        let mut key_result = key_result.into_active_model().reset_all();
        key_result.id = ActiveValue::NotSet;

        Ok(key_result.insert(&self.context.db).await?)
    }

    /// Insert a mock key result under an objective.
    pub async fn insert_mock_key_result(
        &self,
        objective_id: i32,
        progress: Option<i32>,
        is_completed: bool,
    ) -> Result<KeyResultModel, TestError> {
        self.insert_key_result(factory::mock_key_result_model(
            0,
            objective_id,
            progress,
            is_completed,
        ))
        .await
    }

    /// Insert the company settings row.
    pub async fn insert_company_settings(
        &self,
        company_name: Option<&str>,
    ) -> Result<CompanySettingsModel, TestError> {
        let settings = entity::company_settings::ActiveModel {
            company_name: ActiveValue::Set(company_name.map(str::to_string)),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(settings.insert(&self.context.db).await?)
    }
}
