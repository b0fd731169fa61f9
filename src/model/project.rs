use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project as rendered to a viewer who passed the access policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDto {
    pub id: i32,
    pub user_id: i32,
    pub community_id: i32,
    pub title: String,
    pub public: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<entity::project::Model> for ProjectDto {
    fn from(project: entity::project::Model) -> Self {
        Self {
            id: project.id,
            user_id: project.user_id,
            community_id: project.community_id,
            title: project.title,
            public: project.public,
            published_at: project.published_at,
        }
    }
}
