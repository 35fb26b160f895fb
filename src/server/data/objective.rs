use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct ObjectiveRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ObjectiveRepository<'a, C> {
    /// Creates a new instance of [`ObjectiveRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every objective, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::objective::Model>, DbErr> {
        entity::prelude::Objective::find()
            .order_by_asc(entity::objective::Column::Id)
            .all(self.db)
            .await
    }

    /// Objectives belonging to a team, ordered by ID
    ///
    /// Returns an empty list when the team doesn't exist.
    pub async fn get_by_team_id(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::objective::Model>, DbErr> {
        entity::prelude::Objective::find()
            .filter(entity::objective::Column::TeamId.eq(team_id))
            .order_by_asc(entity::objective::Column::Id)
            .all(self.db)
            .await
    }
}
