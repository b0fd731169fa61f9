use chrono::Utc;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::comment::CommentRepository;
use crate::server::model::comment::CreateCommentParams;

#[tokio::test]
async fn creates_an_active_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let comment = CommentRepository::new(db)
        .create(CreateCommentParams {
            post_id: post.id,
            user_id: author.id,
            comment_text: String::from("<p>First!</p>"),
            date_commented: Utc::now(),
        })
        .await
        .unwrap();

    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.user_id, author.id);
    assert_eq!(comment.comment_text, "<p>First!</p>");
    assert!(comment.active);
    assert_eq!(comment.deactivated_by_id, None);
    assert_eq!(comment.deactivated_on, None);

    Ok(())
}

#[tokio::test]
async fn counts_only_active_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    factory::create_comment(db, post.id, author.id).await?;
    factory::create_comment(db, post.id, author.id).await?;
    factory::comment::CommentFactory::new(db, post.id, author.id)
        .active(false)
        .build()
        .await?;

    let count = CommentRepository::new(db)
        .count_active_by_post(post.id)
        .await
        .unwrap();

    assert_eq!(count, 2);

    Ok(())
}
