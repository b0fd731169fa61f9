use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for posting a new comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateCommentDto {
    pub text: String,
}

/// Form fields posted by the inbound-mail webhook.
///
/// Field names follow the mail provider's hook payload, so they are
/// capitalized or kebab-cased rather than snake_cased.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InboundEmailDto {
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "stripped-text")]
    pub stripped_text: String,
}

/// A comment as rendered to clients, with its author and whether the
/// requesting user has thanked it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentDto {
    pub id: i32,
    pub post_id: i32,
    pub comment_text: String,
    pub date_commented: DateTime<Utc>,
    pub user: Option<CommentUserDto>,
    pub is_thanked: bool,
}

/// The author fields embedded in a [`CommentDto`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentUserDto {
    pub id: i32,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl From<entity::user::Model> for CommentUserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            avatar_url: user.avatar_url,
        }
    }
}
