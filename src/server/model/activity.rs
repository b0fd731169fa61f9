/// What the actor did to earn the reader a notification row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    /// Someone commented on a thread the reader follows.
    Comment,
    /// Someone mentioned the reader in a comment.
    Mention,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Mention => "mention",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateActivityParams {
    pub actor_id: i32,
    pub reader_id: i32,
    pub post_id: i32,
    pub comment_id: Option<i32>,
    pub action: ActivityAction,
}
