use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::activity::CreateActivityParams;

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        params: CreateActivityParams,
    ) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            actor_id: ActiveValue::Set(params.actor_id),
            reader_id: ActiveValue::Set(params.reader_id),
            post_id: ActiveValue::Set(params.post_id),
            comment_id: ActiveValue::Set(params.comment_id),
            action: ActiveValue::Set(params.action.as_str().to_string()),
            unread: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn find_by_comment(
        &self,
        comment_id: i32,
    ) -> Result<Vec<entity::activity::Model>, DbErr> {
        entity::prelude::Activity::find()
            .filter(entity::activity::Column::CommentId.eq(comment_id))
            .all(self.conn)
            .await
    }

    /// Removes every notification row referencing a comment. Returns
    /// how many rows were deleted.
    pub async fn delete_by_comment(&self, comment_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Activity::delete_many()
            .filter(entity::activity::Column::CommentId.eq(comment_id))
            .exec(self.conn)
            .await?;
        Ok(result.rows_affected)
    }
}
