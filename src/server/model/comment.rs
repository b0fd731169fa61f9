use chrono::{DateTime, Utc};

use crate::model::comment::{CommentDto, CommentUserDto};

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub post_id: i32,
    pub user_id: i32,
    pub comment_text: String,
    pub date_commented: DateTime<Utc>,
}

/// A comment joined with its author and the viewer's thank state.
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: entity::comment::Model,
    pub author: Option<entity::user::Model>,
    pub is_thanked: bool,
}

impl CommentWithAuthor {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            post_id: self.comment.post_id,
            comment_text: self.comment.comment_text,
            date_commented: self.comment.date_commented,
            user: self.author.map(CommentUserDto::from),
            is_thanked: self.is_thanked,
        }
    }
}
