use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct CompanySettingsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanySettingsRepository<'a, C> {
    /// Creates a new instance of [`CompanySettingsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// The company settings row, if one has been saved
    ///
    /// Settings are a singleton; should several rows exist the oldest one wins.
    pub async fn get(&self) -> Result<Option<entity::company_settings::Model>, DbErr> {
        entity::prelude::CompanySettings::find()
            .order_by_asc(entity::company_settings::Column::Id)
            .one(self.db)
            .await
    }
}
