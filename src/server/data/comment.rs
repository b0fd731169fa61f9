use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::comment::CreateCommentParams;

pub struct CommentRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        params: CreateCommentParams,
    ) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            user_id: ActiveValue::Set(params.user_id),
            comment_text: ActiveValue::Set(params.comment_text),
            date_commented: ActiveValue::Set(params.date_commented),
            active: ActiveValue::Set(true),
            deactivated_by_id: ActiveValue::Set(None),
            deactivated_on: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id).one(self.conn).await
    }

    /// Active comments on a post with their authors, in ascending id
    /// order.
    pub async fn find_active_by_post(
        &self,
        post_id: i32,
    ) -> Result<Vec<(entity::comment::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::Active.eq(true))
            .order_by_asc(entity::comment::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.conn)
            .await
    }

    pub async fn count_active_by_post(&self, post_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::Active.eq(true))
            .count(self.conn)
            .await
    }

    /// Marks a comment inactive, recording who retracted it and when.
    pub async fn deactivate(
        &self,
        comment: entity::comment::Model,
        deactivated_by_id: i32,
    ) -> Result<entity::comment::Model, DbErr> {
        let mut active_comment = comment.into_active_model();
        active_comment.active = ActiveValue::Set(false);
        active_comment.deactivated_by_id = ActiveValue::Set(Some(deactivated_by_id));
        active_comment.deactivated_on = ActiveValue::Set(Some(Utc::now()));
        active_comment.update(self.conn).await
    }
}
