use serde::{Deserialize, Serialize};

/// Which email template a comment notification should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationVersion {
    /// The recipient follows the thread.
    Default,
    /// The recipient was mentioned in the comment body.
    Mention,
}

impl NotificationVersion {
    /// Template version name sent to the mail API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Mention => "mention",
        }
    }
}

/// Work handed off to the background worker after a request commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Job {
    CommentNotificationEmail {
        recipient_id: i32,
        comment_id: i32,
        version: NotificationVersion,
    },
}
