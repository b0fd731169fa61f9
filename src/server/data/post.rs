use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter};

pub struct PostRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::post::Model>, DbErr> {
        entity::prelude::Post::find_by_id(id).one(self.conn).await
    }

    /// Writes a freshly-recomputed active comment count and bumps the
    /// activity timestamp.
    pub async fn update_comment_stats(
        &self,
        post_id: i32,
        num_comments: i32,
        last_updated: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::Post::update_many()
            .filter(entity::post::Column::Id.eq(post_id))
            .col_expr(entity::post::Column::NumComments, Expr::value(num_comments))
            .col_expr(entity::post::Column::LastUpdated, Expr::value(last_updated))
            .exec(self.conn)
            .await?;
        Ok(())
    }

    pub async fn decrement_num_comments(&self, post_id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::update_many()
            .filter(entity::post::Column::Id.eq(post_id))
            .col_expr(
                entity::post::Column::NumComments,
                Expr::col(entity::post::Column::NumComments).sub(1),
            )
            .exec(self.conn)
            .await?;
        Ok(())
    }
}
