use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250815_000001_create_user_table::User, m20250816_000007_create_community_table::Community,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(integer(Project::UserId))
                    .col(integer(Project::CommunityId))
                    .col(string(Project::Title))
                    .col(boolean(Project::Public).default(false))
                    .col(timestamp_null(Project::PublishedAt))
                    .col(
                        timestamp(Project::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_user_id")
                            .from(Project::Table, Project::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_community_id")
                            .from(Project::Table, Project::CommunityId)
                            .to(Community::Table, Community::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Project {
    Table,
    Id,
    UserId,
    CommunityId,
    Title,
    Public,
    PublishedAt,
    CreatedAt,
}
