use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::comment::CommentRepository;

#[tokio::test]
async fn returns_active_comments_with_authors_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let first = factory::create_comment(db, post.id, author.id).await?;
    let second = factory::create_comment(db, post.id, author.id).await?;
    factory::comment::CommentFactory::new(db, post.id, author.id)
        .active(false)
        .build()
        .await?;

    let rows = CommentRepository::new(db)
        .find_active_by_post(post.id)
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.id, first.id);
    assert_eq!(rows[1].0.id, second.id);
    assert_eq!(rows[0].1.as_ref().map(|user| user.id), Some(author.id));

    Ok(())
}

#[tokio::test]
async fn excludes_comments_on_other_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let other_post = factory::create_post(db, author.id).await?;
    factory::create_comment(db, post.id, author.id).await?;
    factory::create_comment(db, other_post.id, author.id).await?;

    let rows = CommentRepository::new(db)
        .find_active_by_post(post.id)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);

    Ok(())
}
