use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::thank::ThankRepository;

#[tokio::test]
async fn create_find_and_delete_a_thank() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let reader = factory::create_user(db).await?;

    let repo = ThankRepository::new(db);
    assert!(repo
        .find_by_comment_and_user(comment.id, reader.id)
        .await
        .unwrap()
        .is_none());

    let thank = repo.create(comment.id, reader.id).await.unwrap();
    let found = repo
        .find_by_comment_and_user(comment.id, reader.id)
        .await
        .unwrap();
    assert_eq!(found.map(|t| t.id), Some(thank.id));

    repo.delete(thank.id).await.unwrap();
    assert!(repo
        .find_by_comment_and_user(comment.id, reader.id)
        .await
        .unwrap()
        .is_none());

    Ok(())
}

#[tokio::test]
async fn thanked_comment_ids_filters_to_the_given_user_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let first = factory::create_comment(db, post.id, author.id).await?;
    let second = factory::create_comment(db, post.id, author.id).await?;
    let reader = factory::create_user(db).await?;
    let other_reader = factory::create_user(db).await?;

    let repo = ThankRepository::new(db);
    repo.create(first.id, reader.id).await.unwrap();
    repo.create(second.id, other_reader.id).await.unwrap();

    let thanked = repo
        .thanked_comment_ids(reader.id, &[first.id, second.id])
        .await
        .unwrap();
    assert_eq!(thanked, vec![first.id]);

    let none = repo.thanked_comment_ids(reader.id, &[]).await.unwrap();
    assert!(none.is_empty());

    Ok(())
}
