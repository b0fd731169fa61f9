use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250815_000001_create_user_table::User, m20250815_000003_create_comment_table::Comment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Thank::Table)
                    .if_not_exists()
                    .col(pk_auto(Thank::Id))
                    .col(integer(Thank::CommentId))
                    .col(integer(Thank::ThankedById))
                    .col(
                        timestamp(Thank::DateThanked)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_thank_comment_id")
                            .from(Thank::Table, Thank::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_thank_thanked_by_id")
                            .from(Thank::Table, Thank::ThankedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One thank per user per comment.
        manager
            .create_index(
                Index::create()
                    .name("idx_thank_comment_thanked_by")
                    .table(Thank::Table)
                    .col(Thank::CommentId)
                    .col(Thank::ThankedById)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Thank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Thank {
    Table,
    Id,
    CommentId,
    ThankedById,
    DateThanked,
}
