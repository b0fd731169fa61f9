use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::service::comment::CommentService;
use crate::server::service::queue::JobQueue;

#[tokio::test]
async fn toggling_twice_lands_back_on_not_thanked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let reader = factory::create_user(db).await?;

    let (queue, _jobs) = JobQueue::new();
    let service = CommentService::new(db, &queue);

    assert!(service.toggle_thank(comment.id, reader.id).await.unwrap());
    assert!(!service.toggle_thank(comment.id, reader.id).await.unwrap());

    let listed = service.find_for_post(post.id, reader.id).await.unwrap();
    assert!(!listed[0].is_thanked);

    Ok(())
}

#[tokio::test]
async fn toggling_three_times_lands_on_thanked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let reader = factory::create_user(db).await?;

    let (queue, _jobs) = JobQueue::new();
    let service = CommentService::new(db, &queue);

    assert!(service.toggle_thank(comment.id, reader.id).await.unwrap());
    assert!(!service.toggle_thank(comment.id, reader.id).await.unwrap());
    assert!(service.toggle_thank(comment.id, reader.id).await.unwrap());

    let listed = service.find_for_post(post.id, reader.id).await.unwrap();
    assert!(listed[0].is_thanked);

    Ok(())
}

#[tokio::test]
async fn thank_state_is_per_viewer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let thanker = factory::create_user(db).await?;
    let bystander = factory::create_user(db).await?;

    let (queue, _jobs) = JobQueue::new();
    let service = CommentService::new(db, &queue);

    service.toggle_thank(comment.id, thanker.id).await.unwrap();

    let for_thanker = service.find_for_post(post.id, thanker.id).await.unwrap();
    assert!(for_thanker[0].is_thanked);
    let for_bystander = service.find_for_post(post.id, bystander.id).await.unwrap();
    assert!(!for_bystander[0].is_thanked);

    Ok(())
}
