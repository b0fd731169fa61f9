use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::data::user::UserRepository;
use crate::server::error::{AppError, AuthError};

/// Session key holding the signed-in user's id.
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Resolves the signed-in user for a request, or refuses it.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the user behind the session, failing with a 403 when the
    /// session is anonymous or references a user that no longer exists.
    pub async fn require(&self) -> Result<entity::user::Model, AppError> {
        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        Ok(user)
    }
}
