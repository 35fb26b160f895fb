use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_create_okr_user_table::OkrUser,
    m20251101_000003_create_objective_table::Objective,
};

static IDX_KEY_RESULT_OBJECTIVE_ID: &str = "idx_key_result_objective_id";
static FK_KEY_RESULT_OBJECTIVE_ID: &str = "fk_key_result_objective_id";
static FK_KEY_RESULT_OWNER_ID: &str = "fk_key_result_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KeyResult::Table)
                    .if_not_exists()
                    .col(pk_auto(KeyResult::Id))
                    .col(string(KeyResult::Title))
                    .col(integer(KeyResult::ObjectiveId))
                    .col(integer_null(KeyResult::Progress))
                    .col(double_null(KeyResult::TargetValue))
                    .col(double_null(KeyResult::CurrentValue))
                    .col(integer_null(KeyResult::OwnerId))
                    .col(boolean(KeyResult::IsCompleted).default(false))
                    .col(timestamp(KeyResult::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_KEY_RESULT_OBJECTIVE_ID)
                    .table(KeyResult::Table)
                    .col(KeyResult::ObjectiveId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_KEY_RESULT_OBJECTIVE_ID)
                    .from_tbl(KeyResult::Table)
                    .from_col(KeyResult::ObjectiveId)
                    .to_tbl(Objective::Table)
                    .to_col(Objective::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_KEY_RESULT_OWNER_ID)
                    .from_tbl(KeyResult::Table)
                    .from_col(KeyResult::OwnerId)
                    .to_tbl(OkrUser::Table)
                    .to_col(OkrUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_KEY_RESULT_OWNER_ID)
                    .table(KeyResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_KEY_RESULT_OBJECTIVE_ID)
                    .table(KeyResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_KEY_RESULT_OBJECTIVE_ID)
                    .table(KeyResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(KeyResult::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum KeyResult {
    Table,
    Id,
    Title,
    ObjectiveId,
    Progress,
    TargetValue,
    CurrentValue,
    OwnerId,
    IsCompleted,
    CreatedAt,
}
