use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OkrUser::Table)
                    .if_not_exists()
                    .col(pk_auto(OkrUser::Id))
                    .col(string_uniq(OkrUser::Username))
                    .col(string_null(OkrUser::FullName))
                    .col(string_null(OkrUser::Email))
                    .col(timestamp(OkrUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OkrUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OkrUser {
    Table,
    Id,
    Username,
    FullName,
    Email,
    CreatedAt,
}
