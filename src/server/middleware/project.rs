use sea_orm::ConnectionTrait;

use crate::server::data::project::ProjectRepository;
use crate::server::error::{AppError, AuthError};

/// Access policy for projects.
///
/// Exactly one branch decides the outcome:
/// - the project's creator always gets through;
/// - a draft is visible only to its contributors;
/// - a published public project is visible to everyone;
/// - a published non-public project is visible to members of its
///   community.
pub struct ProjectGuard<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectGuard<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn require(
        &self,
        user: &entity::user::Model,
        project_id: i32,
    ) -> Result<entity::project::Model, AppError> {
        let repo = ProjectRepository::new(self.conn);
        let Some(project) = repo.find_by_id(project_id).await? else {
            return Err(AppError::NotFound(String::from("Project not found")));
        };

        if project.user_id == user.id {
            return Ok(project);
        }

        if project.is_draft() {
            if repo.contributor_exists(project.id, user.id).await? {
                return Ok(project);
            }
            return Err(AuthError::AccessDenied {
                user_id: user.id,
                reason: String::from("not a contributor on this draft"),
            }
            .into());
        }

        if project.is_public() {
            return Ok(project);
        }

        if repo
            .community_member_exists(project.community_id, user.id)
            .await?
        {
            return Ok(project);
        }
        Err(AuthError::AccessDenied {
            user_id: user.id,
            reason: String::from("not a member of the project's community"),
        }
        .into())
    }
}
