use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

pub struct ThankRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ThankRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_comment_and_user(
        &self,
        comment_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::thank::Model>, DbErr> {
        entity::prelude::Thank::find()
            .filter(entity::thank::Column::CommentId.eq(comment_id))
            .filter(entity::thank::Column::ThankedById.eq(user_id))
            .one(self.conn)
            .await
    }

    pub async fn create(
        &self,
        comment_id: i32,
        user_id: i32,
    ) -> Result<entity::thank::Model, DbErr> {
        entity::thank::ActiveModel {
            comment_id: ActiveValue::Set(comment_id),
            thanked_by_id: ActiveValue::Set(user_id),
            date_thanked: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Thank::delete_by_id(id)
            .exec(self.conn)
            .await?;
        Ok(())
    }

    /// Of the given comments, the ids the user has thanked.
    pub async fn thanked_comment_ids(
        &self,
        user_id: i32,
        comment_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Thank::find()
            .select_only()
            .column(entity::thank::Column::CommentId)
            .filter(entity::thank::Column::ThankedById.eq(user_id))
            .filter(entity::thank::Column::CommentId.is_in(comment_ids.to_vec()))
            .into_tuple()
            .all(self.conn)
            .await
    }
}
