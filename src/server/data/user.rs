use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter,
};

use crate::server::model::user::UpsertUserParams;

pub struct UserRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.conn).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.conn)
            .await
    }

    /// Inserts a user keyed by email, refreshing name and avatar when
    /// the email is already known.
    pub async fn upsert(&self, params: UpsertUserParams) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            avatar_url: ActiveValue::Set(params.avatar_url),
            new_notification_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        entity::prelude::User::insert(user)
            .on_conflict(
                OnConflict::column(entity::user::Column::Email)
                    .update_columns([
                        entity::user::Column::Name,
                        entity::user::Column::AvatarUrl,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.conn)
            .await
    }

    pub async fn increment_new_notification_count(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::NewNotificationCount,
                Expr::col(entity::user::Column::NewNotificationCount).add(1),
            )
            .exec(self.conn)
            .await?;
        Ok(())
    }
}
