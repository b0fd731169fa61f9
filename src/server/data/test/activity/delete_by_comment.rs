use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::activity::ActivityRepository;
use crate::server::model::activity::{ActivityAction, CreateActivityParams};

#[tokio::test]
async fn removes_only_rows_for_the_given_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let comment = factory::create_comment(db, post.id, author.id).await?;
    let other_comment = factory::create_comment(db, post.id, author.id).await?;

    let repo = ActivityRepository::new(db);
    repo.create(CreateActivityParams {
        actor_id: author.id,
        reader_id: reader.id,
        post_id: post.id,
        comment_id: Some(comment.id),
        action: ActivityAction::Comment,
    })
    .await
    .unwrap();
    repo.create(CreateActivityParams {
        actor_id: author.id,
        reader_id: reader.id,
        post_id: post.id,
        comment_id: Some(other_comment.id),
        action: ActivityAction::Mention,
    })
    .await
    .unwrap();

    let deleted = repo.delete_by_comment(comment.id).await.unwrap();
    assert_eq!(deleted, 1);

    assert!(repo.find_by_comment(comment.id).await.unwrap().is_empty());
    let remaining = repo.find_by_comment(other_comment.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].action, "mention");

    Ok(())
}
