use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_create_team_table::Team, m20251101_000002_create_okr_user_table::OkrUser,
};

static IDX_OBJECTIVE_TEAM_ID: &str = "idx_objective_team_id";
static FK_OBJECTIVE_TEAM_ID: &str = "fk_objective_team_id";
static FK_OBJECTIVE_OWNER_ID: &str = "fk_objective_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Objective::Table)
                    .if_not_exists()
                    .col(pk_auto(Objective::Id))
                    .col(string(Objective::Title))
                    .col(text_null(Objective::Description))
                    .col(integer_null(Objective::Progress))
                    .col(integer_null(Objective::TeamId))
                    .col(integer_null(Objective::OwnerId))
                    .col(boolean(Objective::IsCompanyObjective).default(false))
                    .col(timestamp(Objective::StartDate))
                    .col(timestamp(Objective::EndDate))
                    .col(string_null(Objective::Status).default("Not Started"))
                    .col(string(Objective::Priority).default("medium"))
                    .col(timestamp(Objective::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OBJECTIVE_TEAM_ID)
                    .table(Objective::Table)
                    .col(Objective::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OBJECTIVE_TEAM_ID)
                    .from_tbl(Objective::Table)
                    .from_col(Objective::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OBJECTIVE_OWNER_ID)
                    .from_tbl(Objective::Table)
                    .from_col(Objective::OwnerId)
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
                    .name(FK_OBJECTIVE_OWNER_ID)
                    .table(Objective::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_OBJECTIVE_TEAM_ID)
                    .table(Objective::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OBJECTIVE_TEAM_ID)
                    .table(Objective::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Objective::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Objective {
    Table,
    Id,
    Title,
    Description,
    Progress,
    TeamId,
    OwnerId,
    IsCompanyObjective,
    StartDate,
    EndDate,
    Status,
    Priority,
    CreatedAt,
}
