pub use sea_orm_migration::prelude::*;

mod m20250815_000001_create_user_table;
mod m20250815_000002_create_post_table;
mod m20250815_000003_create_comment_table;
mod m20250815_000004_create_thank_table;
mod m20250815_000005_create_follower_table;
mod m20250815_000006_create_activity_table;
mod m20250816_000007_create_community_table;
mod m20250816_000008_create_project_table;
mod m20250816_000009_create_project_membership_table;
mod m20250816_000010_create_community_membership_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250815_000001_create_user_table::Migration),
            Box::new(m20250815_000002_create_post_table::Migration),
            Box::new(m20250815_000003_create_comment_table::Migration),
            Box::new(m20250815_000004_create_thank_table::Migration),
            Box::new(m20250815_000005_create_follower_table::Migration),
            Box::new(m20250815_000006_create_activity_table::Migration),
            Box::new(m20250816_000007_create_community_table::Migration),
            Box::new(m20250816_000008_create_project_table::Migration),
            Box::new(m20250816_000009_create_project_membership_table::Migration),
            Box::new(m20250816_000010_create_community_membership_table::Migration),
        ]
    }
}
