use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct FollowerRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> FollowerRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn user_ids_for_post(&self, post_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Follower::find()
            .select_only()
            .column(entity::follower::Column::UserId)
            .filter(entity::follower::Column::PostId.eq(post_id))
            .into_tuple()
            .all(self.conn)
            .await
    }

    /// Subscribes the given users to a post. Users already following are
    /// left untouched.
    pub async fn add_followers(
        &self,
        post_id: i32,
        user_ids: &[i32],
        added_by_id: Option<i32>,
    ) -> Result<(), DbErr> {
        if user_ids.is_empty() {
            return Ok(());
        }

        let followers = user_ids.iter().map(|&user_id| entity::follower::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            user_id: ActiveValue::Set(user_id),
            added_by_id: ActiveValue::Set(added_by_id),
            date_added: ActiveValue::Set(Utc::now()),
            ..Default::default()
        });

        entity::prelude::Follower::insert_many(followers)
            .on_conflict(
                OnConflict::columns([
                    entity::follower::Column::PostId,
                    entity::follower::Column::UserId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.conn)
            .await?;
        Ok(())
    }
}
