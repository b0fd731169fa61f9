use chrono::Utc;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::post::PostRepository;

#[tokio::test]
async fn writes_count_and_activity_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let now = Utc::now();
    repo.update_comment_stats(post.id, 5, now).await.unwrap();

    let updated = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(updated.num_comments, 5);
    assert!(updated.last_updated >= post.last_updated);

    Ok(())
}

#[tokio::test]
async fn decrement_lowers_the_count_by_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::post::PostFactory::new(db, author.id)
        .num_comments(3)
        .build()
        .await?;

    let repo = PostRepository::new(db);
    repo.decrement_num_comments(post.id).await.unwrap();

    let updated = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(updated.num_comments, 2);

    Ok(())
}
