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
                    .table(CommunityMembership::Table)
                    .if_not_exists()
                    .col(pk_auto(CommunityMembership::Id))
                    .col(integer(CommunityMembership::CommunityId))
                    .col(integer(CommunityMembership::UserId))
                    .col(
                        timestamp(CommunityMembership::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_community_membership_community_id")
                            .from(CommunityMembership::Table, CommunityMembership::CommunityId)
                            .to(Community::Table, Community::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_community_membership_user_id")
                            .from(CommunityMembership::Table, CommunityMembership::UserId)
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
                    .name("idx_community_membership_community_user")
                    .table(CommunityMembership::Table)
                    .col(CommunityMembership::CommunityId)
                    .col(CommunityMembership::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommunityMembership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommunityMembership {
    Table,
    Id,
    CommunityId,
    UserId,
    CreatedAt,
}
