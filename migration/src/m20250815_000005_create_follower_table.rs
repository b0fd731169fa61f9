use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250815_000001_create_user_table::User, m20250815_000002_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follower::Table)
                    .if_not_exists()
                    .col(pk_auto(Follower::Id))
                    .col(integer(Follower::PostId))
                    .col(integer(Follower::UserId))
                    .col(integer_null(Follower::AddedById))
                    .col(
                        timestamp(Follower::DateAdded)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follower_post_id")
                            .from(Follower::Table, Follower::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follower_user_id")
                            .from(Follower::Table, Follower::UserId)
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
                    .name("idx_follower_post_user")
                    .table(Follower::Table)
                    .col(Follower::PostId)
                    .col(Follower::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Follower::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Follower {
    Table,
    Id,
    PostId,
    UserId,
    AddedById,
    DateAdded,
}
