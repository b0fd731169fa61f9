use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::server::data::activity::ActivityRepository;
use crate::server::data::follower::FollowerRepository;
use crate::server::data::post::PostRepository;
use crate::server::data::user::UserRepository;
use crate::server::model::job::{Job, NotificationVersion};
use crate::server::service::comment::CommentService;
use crate::server::service::queue::JobQueue;

fn drain(jobs: &mut UnboundedReceiver<Job>) -> Vec<Job> {
    let mut drained = Vec::new();
    while let Ok(job) = jobs.try_recv() {
        drained.push(job);
    }
    drained
}

#[tokio::test]
async fn sanitizes_text_and_recounts_the_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let (queue, _jobs) = JobQueue::new();
    let service = CommentService::new(db, &queue);

    let comment = service
        .create(
            author.id,
            "<p>hello</p><script>alert('x')</script>",
            &post,
        )
        .await
        .unwrap();

    assert_eq!(comment.comment_text, "<p>hello</p>");
    assert!(comment.active);

    let updated_post = PostRepository::new(db)
        .find_by_id(post.id)
        .await?
        .unwrap();
    assert_eq!(updated_post.num_comments, 1);
    assert!(updated_post.last_updated >= post.last_updated);

    Ok(())
}

#[tokio::test]
async fn notifies_followers_and_mentions_exactly_once_each() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let follower = factory::create_user(db).await?;
    let mentioned = factory::create_user(db).await?;
    // this user both follows the thread and is mentioned in the comment
    let follower_and_mentioned = factory::create_user(db).await?;
    factory::helpers::add_follower(db, post.id, follower.id).await?;
    factory::helpers::add_follower(db, post.id, follower_and_mentioned.id).await?;

    let (queue, mut jobs) = JobQueue::new();
    let service = CommentService::new(db, &queue);

    let text = format!(
        r#"<p><a data-user-id="{}">@A</a> <a data-user-id="{}">@B</a> <a data-user-id="{}">@A</a></p>"#,
        mentioned.id, follower_and_mentioned.id, mentioned.id
    );
    let comment = service.create(author.id, &text, &post).await.unwrap();

    let activities = ActivityRepository::new(db)
        .find_by_comment(comment.id)
        .await?;
    assert_eq!(activities.len(), 3);
    let mention_readers: Vec<i32> = activities
        .iter()
        .filter(|a| a.action == "mention")
        .map(|a| a.reader_id)
        .collect();
    let comment_readers: Vec<i32> = activities
        .iter()
        .filter(|a| a.action == "comment")
        .map(|a| a.reader_id)
        .collect();
    assert!(mention_readers.contains(&mentioned.id));
    assert!(mention_readers.contains(&follower_and_mentioned.id));
    assert_eq!(comment_readers, vec![follower.id]);

    let sent = drain(&mut jobs);
    assert_eq!(sent.len(), 3);
    assert!(sent.contains(&Job::CommentNotificationEmail {
        recipient_id: mentioned.id,
        comment_id: comment.id,
        version: NotificationVersion::Mention,
    }));
    assert!(sent.contains(&Job::CommentNotificationEmail {
        recipient_id: follower_and_mentioned.id,
        comment_id: comment.id,
        version: NotificationVersion::Mention,
    }));
    assert!(sent.contains(&Job::CommentNotificationEmail {
        recipient_id: follower.id,
        comment_id: comment.id,
        version: NotificationVersion::Default,
    }));

    let user_repo = UserRepository::new(db);
    for reader in [&follower, &mentioned, &follower_and_mentioned] {
        let updated = user_repo.find_by_id(reader.id).await?.unwrap();
        assert_eq!(updated.new_notification_count, 1);
    }

    Ok(())
}

#[tokio::test]
async fn commenter_never_notifies_themself() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    factory::helpers::add_follower(db, post.id, author.id).await?;

    let (queue, mut jobs) = JobQueue::new();
    let service = CommentService::new(db, &queue);

    // a self-mention is ignored too
    let text = format!(r#"<p><a data-user-id="{}">@me</a> done</p>"#, author.id);
    let comment = service.create(author.id, &text, &post).await.unwrap();

    assert!(ActivityRepository::new(db)
        .find_by_comment(comment.id)
        .await?
        .is_empty());
    assert!(drain(&mut jobs).is_empty());

    let updated_author = UserRepository::new(db).find_by_id(author.id).await?.unwrap();
    assert_eq!(updated_author.new_notification_count, 0);

    Ok(())
}

#[tokio::test]
async fn commenter_and_mentioned_users_start_following() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let mentioned = factory::create_user(db).await?;
    let existing_follower = factory::create_user(db).await?;
    factory::helpers::add_follower(db, post.id, existing_follower.id).await?;

    let (queue, _jobs) = JobQueue::new();
    let service = CommentService::new(db, &queue);

    let text = format!(r#"<p><a data-user-id="{}">@M</a></p>"#, mentioned.id);
    service.create(author.id, &text, &post).await.unwrap();

    let mut followers = FollowerRepository::new(db).user_ids_for_post(post.id).await?;
    followers.sort();
    let mut expected = vec![author.id, mentioned.id, existing_follower.id];
    expected.sort();
    assert_eq!(followers, expected);

    Ok(())
}
