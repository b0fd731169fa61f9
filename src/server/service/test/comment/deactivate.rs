use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::activity::ActivityRepository;
use crate::server::data::comment::CommentRepository;
use crate::server::data::post::PostRepository;
use crate::server::service::comment::CommentService;
use crate::server::service::queue::JobQueue;

#[tokio::test]
async fn retraction_updates_count_activities_and_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let follower = factory::create_user(db).await?;
    factory::helpers::add_follower(db, post.id, follower.id).await?;

    let (queue, _jobs) = JobQueue::new();
    let service = CommentService::new(db, &queue);

    let comment = service.create(author.id, "<p>oops</p>", &post).await.unwrap();
    let keeper = service.create(author.id, "<p>stays</p>", &post).await.unwrap();

    service.deactivate(comment.clone(), author.id).await.unwrap();

    let retracted = CommentRepository::new(db)
        .find_by_id(comment.id)
        .await?
        .unwrap();
    assert!(!retracted.active);
    assert_eq!(retracted.deactivated_by_id, Some(author.id));
    assert_eq!(retracted.comment_text, "<p>oops</p>");

    // notification rows for the retracted comment are gone, the rest stay
    assert!(ActivityRepository::new(db)
        .find_by_comment(comment.id)
        .await?
        .is_empty());
    assert_eq!(
        ActivityRepository::new(db)
            .find_by_comment(keeper.id)
            .await?
            .len(),
        1
    );

    let updated_post = PostRepository::new(db).find_by_id(post.id).await?.unwrap();
    assert_eq!(updated_post.num_comments, 1);
    assert_eq!(
        updated_post.num_comments as u64,
        CommentRepository::new(db)
            .count_active_by_post(post.id)
            .await?
    );

    Ok(())
}

#[tokio::test]
async fn retracting_twice_decrements_the_count_only_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let (queue, _jobs) = JobQueue::new();
    let service = CommentService::new(db, &queue);

    let retracted = service.create(author.id, "<p>oops</p>", &post).await.unwrap();
    let keeper = service.create(author.id, "<p>stays</p>", &post).await.unwrap();

    service.deactivate(retracted.clone(), author.id).await.unwrap();
    let once_retracted = CommentRepository::new(db)
        .find_by_id(retracted.id)
        .await?
        .unwrap();
    service.deactivate(once_retracted, author.id).await.unwrap();

    let updated_post = PostRepository::new(db).find_by_id(post.id).await?.unwrap();
    assert_eq!(updated_post.num_comments, 1);
    assert_eq!(
        updated_post.num_comments as u64,
        CommentRepository::new(db)
            .count_active_by_post(post.id)
            .await?
    );
    let kept = CommentRepository::new(db).find_by_id(keeper.id).await?.unwrap();
    assert!(kept.active);

    Ok(())
}

#[tokio::test]
async fn listing_skips_retracted_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let (queue, _jobs) = JobQueue::new();
    let service = CommentService::new(db, &queue);

    let retracted = service.create(author.id, "<p>gone</p>", &post).await.unwrap();
    let kept = service.create(author.id, "<p>here</p>", &post).await.unwrap();
    service.deactivate(retracted, author.id).await.unwrap();

    let listed = service.find_for_post(post.id, author.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].comment.id, kept.id);
    assert_eq!(listed[0].author.as_ref().map(|u| u.id), Some(author.id));

    Ok(())
}
