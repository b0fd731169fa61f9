use serde::{Deserialize, Serialize};

/// The signed-in user as reported to the client after login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl From<entity::user::Model> for SessionUserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
        }
    }
}

/// Reported to the client after a successful admin login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUserDto {
    pub email: String,
}
