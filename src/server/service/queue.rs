use sea_orm::DatabaseConnection;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::server::model::job::Job;
use crate::server::service::email::{Mailer, ReplyAddressCodec};
use crate::server::service::notification::NotificationService;

/// Handle for enqueueing background jobs. Enqueueing is best effort;
/// requests never fail because the worker is gone.
#[derive(Clone)]
pub struct JobQueue {
    tx: UnboundedSender<Job>,
}

impl JobQueue {
    pub fn new() -> (Self, UnboundedReceiver<Job>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn enqueue(&self, job: Job) {
        if self.tx.send(job).is_err() {
            tracing::warn!("job queue unavailable, dropping job");
        }
    }
}

/// Drains the job channel for the life of the process. Job failures are
/// logged and the worker moves on.
pub fn start_worker(
    mut jobs: UnboundedReceiver<Job>,
    db: DatabaseConnection,
    mailer: Mailer,
    reply_codec: ReplyAddressCodec,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(job) = jobs.recv().await {
            let result = match job {
                Job::CommentNotificationEmail {
                    recipient_id,
                    comment_id,
                    version,
                } => {
                    NotificationService::new(&db, &mailer, &reply_codec)
                        .send_comment_notification(recipient_id, comment_id, version)
                        .await
                }
            };
            if let Err(err) = result {
                tracing::warn!("background job failed: {}", err);
            }
        }
    })
}
