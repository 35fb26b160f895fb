use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::okr_user::Model>, DbErr> {
        entity::prelude::OkrUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Users with the given IDs, ordered by ID
    ///
    /// IDs without a matching user are skipped.
    pub async fn get_many(&self, user_ids: &[i32]) -> Result<Vec<entity::okr_user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::OkrUser::find()
            .filter(entity::okr_user::Column::Id.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::okr_user::Column::Id)
            .all(self.db)
            .await
    }
}
