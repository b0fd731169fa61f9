use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250815_000001_create_user_table::User, m20250816_000008_create_project_table::Project,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectMembership::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectMembership::Id))
                    .col(integer(ProjectMembership::ProjectId))
                    .col(integer(ProjectMembership::UserId))
                    .col(
                        timestamp(ProjectMembership::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_membership_project_id")
                            .from(ProjectMembership::Table, ProjectMembership::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_membership_user_id")
                            .from(ProjectMembership::Table, ProjectMembership::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_membership_project_user")
                    .table(ProjectMembership::Table)
                    .col(ProjectMembership::ProjectId)
                    .col(ProjectMembership::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectMembership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectMembership {
    Table,
    Id,
    ProjectId,
    UserId,
    CreatedAt,
}
