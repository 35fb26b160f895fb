pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_team_table;
mod m20251101_000002_create_okr_user_table;
mod m20251101_000003_create_objective_table;
mod m20251101_000004_create_key_result_table;
mod m20251101_000005_create_company_settings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_team_table::Migration),
            Box::new(m20251101_000002_create_okr_user_table::Migration),
            Box::new(m20251101_000003_create_objective_table::Migration),
            Box::new(m20251101_000004_create_key_result_table::Migration),
            Box::new(m20251101_000005_create_company_settings_table::Migration),
        ]
    }
}
