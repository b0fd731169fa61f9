//! Shared helper utilities for factory methods.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a post together with its author.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, post))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::post::Model), DbErr> {
    let author = crate::factory::user::create_user(db).await?;
    let post = crate::factory::post::create_post(db, author.id).await?;

    Ok((author, post))
}

/// Creates a comment with its full dependency chain.
///
/// This is a convenience method that creates:
/// 1. User (as comment author and post creator)
/// 2. Post
/// 3. Comment
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, post, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::post::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let (author, post) = create_post_with_author(db).await?;
    let comment = crate::factory::comment::create_comment(db, post.id, author.id).await?;

    Ok((author, post, comment))
}

/// Registers a user as a follower of a post.
///
/// # Arguments
/// - `db` - Database connection
/// - `post_id` - Post to follow
/// - `user_id` - Following user
///
/// # Returns
/// - `Ok(entity::follower::Model)` - Created follower entity
/// - `Err(DbErr)` - Database error during insert
pub async fn add_follower(
    db: &DatabaseConnection,
    post_id: i32,
    user_id: i32,
) -> Result<entity::follower::Model, DbErr> {
    entity::follower::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        user_id: ActiveValue::Set(user_id),
        added_by_id: ActiveValue::Set(None),
        date_added: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a user as a contributor of a project.
///
/// # Arguments
/// - `db` - Database connection
/// - `project_id` - Project to join
/// - `user_id` - Joining user
///
/// # Returns
/// - `Ok(entity::project_membership::Model)` - Created membership entity
/// - `Err(DbErr)` - Database error during insert
pub async fn add_project_member(
    db: &DatabaseConnection,
    project_id: i32,
    user_id: i32,
) -> Result<entity::project_membership::Model, DbErr> {
    entity::project_membership::ActiveModel {
        project_id: ActiveValue::Set(project_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a user as a member of a community.
///
/// # Arguments
/// - `db` - Database connection
/// - `community_id` - Community to join
/// - `user_id` - Joining user
///
/// # Returns
/// - `Ok(entity::community_membership::Model)` - Created membership entity
/// - `Err(DbErr)` - Database error during insert
pub async fn add_community_member(
    db: &DatabaseConnection,
    community_id: i32,
    user_id: i32,
) -> Result<entity::community_membership::Model, DbErr> {
    entity::community_membership::ActiveModel {
        community_id: ActiveValue::Set(community_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
