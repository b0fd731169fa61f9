use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250815_000001_create_user_table::User, m20250815_000002_create_post_table::Post,
    m20250815_000003_create_comment_table::Comment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(pk_auto(Activity::Id))
                    .col(integer(Activity::ActorId))
                    .col(integer(Activity::ReaderId))
                    .col(integer(Activity::PostId))
                    .col(integer_null(Activity::CommentId))
                    .col(string(Activity::Action))
                    .col(boolean(Activity::Unread).default(true))
                    .col(
                        timestamp(Activity::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_actor_id")
                            .from(Activity::Table, Activity::ActorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_reader_id")
                            .from(Activity::Table, Activity::ReaderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_post_id")
                            .from(Activity::Table, Activity::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_comment_id")
                            .from(Activity::Table, Activity::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Activity {
    Table,
    Id,
    ActorId,
    ReaderId,
    PostId,
    CommentId,
    Action,
    Unread,
    CreatedAt,
}
