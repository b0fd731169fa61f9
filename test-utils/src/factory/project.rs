//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// Defaults produce an unpublished (draft), non-public project. Use
/// `published_at` and `public` to exercise the other policy branches.
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    community_id: i32,
    title: String,
    public: bool,
    published_at: Option<DateTime<Utc>>,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Project {id}"` where id is auto-incremented
    /// - public: `false`
    /// - published_at: `None` (draft)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Creator of the project (must exist)
    /// - `community_id` - Community the project belongs to (must exist)
    pub fn new(db: &'a DatabaseConnection, user_id: i32, community_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            community_id,
            title: format!("Project {}", id),
            public: false,
            published_at: None,
        }
    }

    /// Sets the project title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets whether the project is publicly visible once published.
    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Sets the publication timestamp; `Some` takes the project out of draft.
    pub fn published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at = published_at;
        self
    }

    /// Builds and inserts the project entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::project::Model)` - Created project entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            community_id: ActiveValue::Set(self.community_id),
            title: ActiveValue::Set(self.title),
            public: ActiveValue::Set(self.public),
            published_at: ActiveValue::Set(self.published_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft project with default values.
///
/// Shorthand for `ProjectFactory::new(db, user_id, community_id).build().await`.
pub async fn create_project(
    db: &DatabaseConnection,
    user_id: i32,
    community_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, user_id, community_id).build().await
}
