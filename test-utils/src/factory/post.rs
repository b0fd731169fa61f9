//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    num_comments: i32,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Post {id}"` where id is auto-incremented
    /// - num_comments: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Creator of the post (must exist)
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Post {}", id),
            num_comments: 0,
        }
    }

    /// Sets the name for the post.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored comment count for the post.
    pub fn num_comments(mut self, num_comments: i32) -> Self {
        self.num_comments = num_comments;
        self
    }

    /// Builds and inserts the post entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - Created post entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        entity::post::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            num_comments: ActiveValue::Set(self.num_comments),
            last_updated: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given creator.
///
/// Shorthand for `PostFactory::new(db, user_id).build().await`.
pub async fn create_post(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, user_id).build().await
}
