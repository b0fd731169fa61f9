//! Community factory for creating test community entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a community with generated name and slug.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::community::Model)` - Created community entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_community(db: &DatabaseConnection) -> Result<entity::community::Model, DbErr> {
    let id = next_id();
    entity::community::ActiveModel {
        name: ActiveValue::Set(format!("Community {}", id)),
        slug: ActiveValue::Set(format!("community-{}", id)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
