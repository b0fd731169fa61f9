use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::data::activity::ActivityRepository;
use crate::server::data::comment::CommentRepository;
use crate::server::data::follower::FollowerRepository;
use crate::server::data::post::PostRepository;
use crate::server::data::thank::ThankRepository;
use crate::server::data::user::UserRepository;
use crate::server::error::AppError;
use crate::server::model::activity::{ActivityAction, CreateActivityParams};
use crate::server::model::comment::{CommentWithAuthor, CreateCommentParams};
use crate::server::model::job::{Job, NotificationVersion};
use crate::server::service::queue::JobQueue;
use crate::server::util::richtext;

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    job_queue: &'a JobQueue,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection, job_queue: &'a JobQueue) -> Self {
        Self { db, job_queue }
    }

    /// Creates a comment and fans out its side effects in one
    /// transaction: the post's active-comment count is recomputed,
    /// mentioned users and followers get notification rows and counter
    /// bumps, and the commenter plus mentioned users start following
    /// the post. Emails are enqueued only once the transaction commits.
    ///
    /// A follower who is also mentioned gets the mention treatment
    /// only. The commenter never notifies themself.
    pub async fn create(
        &self,
        commenter_id: i32,
        raw_text: &str,
        post: &entity::post::Model,
    ) -> Result<entity::comment::Model, AppError> {
        let text = richtext::sanitize(raw_text);
        let mentioned: Vec<i32> = richtext::user_mentions(&text)
            .into_iter()
            .filter(|&id| id != commenter_id)
            .collect();

        let txn = self.db.begin().await?;

        let comment = CommentRepository::new(&txn)
            .create(CreateCommentParams {
                post_id: post.id,
                user_id: commenter_id,
                comment_text: text,
                date_commented: Utc::now(),
            })
            .await?;

        let num_comments = CommentRepository::new(&txn)
            .count_active_by_post(post.id)
            .await?;
        PostRepository::new(&txn)
            .update_comment_stats(post.id, num_comments as i32, Utc::now())
            .await?;

        let existing_followers = FollowerRepository::new(&txn)
            .user_ids_for_post(post.id)
            .await?;
        let notified_followers: Vec<i32> = existing_followers
            .iter()
            .copied()
            .filter(|&id| id != commenter_id && !mentioned.contains(&id))
            .collect();

        let activity_repo = ActivityRepository::new(&txn);
        let user_repo = UserRepository::new(&txn);

        for &reader_id in &mentioned {
            activity_repo
                .create(CreateActivityParams {
                    actor_id: commenter_id,
                    reader_id,
                    post_id: post.id,
                    comment_id: Some(comment.id),
                    action: ActivityAction::Mention,
                })
                .await?;
            user_repo.increment_new_notification_count(reader_id).await?;
        }

        for &reader_id in &notified_followers {
            activity_repo
                .create(CreateActivityParams {
                    actor_id: commenter_id,
                    reader_id,
                    post_id: post.id,
                    comment_id: Some(comment.id),
                    action: ActivityAction::Comment,
                })
                .await?;
            user_repo.increment_new_notification_count(reader_id).await?;
        }

        let new_followers: Vec<i32> = mentioned
            .iter()
            .copied()
            .chain(std::iter::once(commenter_id))
            .filter(|id| !existing_followers.contains(id))
            .collect();
        FollowerRepository::new(&txn)
            .add_followers(post.id, &new_followers, Some(commenter_id))
            .await?;

        txn.commit().await?;

        for &recipient_id in &mentioned {
            self.job_queue.enqueue(Job::CommentNotificationEmail {
                recipient_id,
                comment_id: comment.id,
                version: NotificationVersion::Mention,
            });
        }
        for &recipient_id in &notified_followers {
            self.job_queue.enqueue(Job::CommentNotificationEmail {
                recipient_id,
                comment_id: comment.id,
                version: NotificationVersion::Default,
            });
        }

        Ok(comment)
    }

    /// Active comments on a post, annotated with whether the viewer has
    /// thanked each one.
    pub async fn find_for_post(
        &self,
        post_id: i32,
        viewer_id: i32,
    ) -> Result<Vec<CommentWithAuthor>, AppError> {
        let rows = CommentRepository::new(self.db)
            .find_active_by_post(post_id)
            .await?;
        let comment_ids: Vec<i32> = rows.iter().map(|(comment, _)| comment.id).collect();
        let thanked = ThankRepository::new(self.db)
            .thanked_comment_ids(viewer_id, &comment_ids)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| CommentWithAuthor {
                is_thanked: thanked.contains(&comment.id),
                comment,
                author,
            })
            .collect())
    }

    /// Retracts a comment: notification rows referencing it are removed,
    /// the post's comment count drops by one, and the comment is marked
    /// inactive with an audit trail of who retracted it. The text stays
    /// in place. Retracting an already-retracted comment is a no-op, so
    /// the count never drops twice for one comment.
    pub async fn deactivate(
        &self,
        comment: entity::comment::Model,
        actor_id: i32,
    ) -> Result<(), AppError> {
        if !comment.active {
            return Ok(());
        }

        let txn = self.db.begin().await?;

        ActivityRepository::new(&txn)
            .delete_by_comment(comment.id)
            .await?;
        PostRepository::new(&txn)
            .decrement_num_comments(comment.post_id)
            .await?;
        CommentRepository::new(&txn)
            .deactivate(comment, actor_id)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    /// Toggles the user's thank on a comment. Returns whether the
    /// comment ends up thanked.
    pub async fn toggle_thank(&self, comment_id: i32, user_id: i32) -> Result<bool, AppError> {
        let repo = ThankRepository::new(self.db);
        match repo.find_by_comment_and_user(comment_id, user_id).await? {
            Some(thank) => {
                repo.delete(thank.id).await?;
                Ok(false)
            }
            None => {
                repo.create(comment_id, user_id).await?;
                Ok(true)
            }
        }
    }
}
