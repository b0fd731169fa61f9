use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::server::data::comment::CommentRepository;
use crate::server::data::post::PostRepository;
use crate::server::data::user::UserRepository;
use crate::server::error::AppError;
use crate::server::model::job::NotificationVersion;
use crate::server::service::email::{EmailSender, Mailer, ReplyAddressCodec, SendOptions};

/// Renders and sends comment notification emails from the background
/// worker. Jobs can outlive the rows they reference, so missing data is
/// treated as a no-op rather than a failure.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
    reply_codec: &'a ReplyAddressCodec,
}

impl<'a> NotificationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        mailer: &'a Mailer,
        reply_codec: &'a ReplyAddressCodec,
    ) -> Self {
        Self {
            db,
            mailer,
            reply_codec,
        }
    }

    pub async fn send_comment_notification(
        &self,
        recipient_id: i32,
        comment_id: i32,
        version: NotificationVersion,
    ) -> Result<(), AppError> {
        let comment_repo = CommentRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let Some(comment) = comment_repo.find_by_id(comment_id).await? else {
            tracing::debug!("comment {} gone before notification went out", comment_id);
            return Ok(());
        };
        if !comment.active {
            tracing::debug!("comment {} retracted before notification went out", comment_id);
            return Ok(());
        }
        let Some(recipient) = user_repo.find_by_id(recipient_id).await? else {
            tracing::debug!("recipient {} gone before notification went out", recipient_id);
            return Ok(());
        };
        let Some(commenter) = user_repo.find_by_id(comment.user_id).await? else {
            return Ok(());
        };
        let Some(post) = PostRepository::new(self.db).find_by_id(comment.post_id).await? else {
            return Ok(());
        };

        let reply_to = self
            .reply_codec
            .post_reply_address(post.id, recipient.id)?;

        // one template for both audiences; the job's version picks the
        // mention or default variant
        self.mailer
            .send_new_comment_notification(SendOptions {
                email: recipient.email,
                data: json!({
                    "commenter_name": commenter.name,
                    "commenter_avatar_url": commenter.avatar_url,
                    "comment_text": comment.comment_text,
                    "post_name": post.name,
                    "post_id": post.id,
                }),
                sender: EmailSender {
                    address: None,
                    name: format!("{} (via Commons)", commenter.name),
                    reply_to: Some(reply_to),
                },
                version: Some(String::from(version.as_str())),
            })
            .await
    }
}
