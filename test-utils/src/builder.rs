use entity::prelude::*;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Post};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Post)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements to execute after table creation, generated
    /// from entity models (e.g. composite unique keys).
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. Tables should be added in dependency order (tables
    /// with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Adds all tables required for comment operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Post
    /// - Comment
    /// - Thank
    /// - Follower
    /// - Activity
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_comment_tables(self) -> Self {
        self.with_table(User)
            .with_table(Post)
            .with_table(Comment)
            .with_table(Thank)
            .with_table(Follower)
            .with_table(Activity)
    }

    /// Adds all tables required for project access-policy operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Community
    /// - Project
    /// - ProjectMembership
    /// - CommunityMembership
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_project_tables(self) -> Self {
        self.with_table(User)
            .with_table(Community)
            .with_table(Project)
            .with_table(ProjectMembership)
            .with_table(CommunityMembership)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
