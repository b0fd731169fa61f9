//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    user_id: i32,
    comment_text: String,
    active: bool,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - comment_text: `"<p>Comment {id}</p>"` where id is auto-incremented
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `post_id` - Parent post (must exist)
    /// - `user_id` - Comment author (must exist)
    pub fn new(db: &'a DatabaseConnection, post_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            post_id,
            user_id,
            comment_text: format!("<p>Comment {}</p>", id),
            active: true,
        }
    }

    /// Sets the comment text.
    pub fn comment_text(mut self, comment_text: impl Into<String>) -> Self {
        self.comment_text = comment_text.into();
        self
    }

    /// Sets whether the comment is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            user_id: ActiveValue::Set(self.user_id),
            comment_text: ActiveValue::Set(self.comment_text),
            date_commented: ActiveValue::Set(Utc::now()),
            active: ActiveValue::Set(self.active),
            deactivated_by_id: ActiveValue::Set(None),
            deactivated_on: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
///
/// Shorthand for `CommentFactory::new(db, post_id, user_id).build().await`.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, user_id).build().await
}
