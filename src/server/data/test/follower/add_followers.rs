use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::follower::FollowerRepository;

#[tokio::test]
async fn subscribes_users_to_a_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    let reader = factory::create_user(db).await?;

    let repo = FollowerRepository::new(db);
    repo.add_followers(post.id, &[author.id, reader.id], Some(author.id))
        .await
        .unwrap();

    let mut followers = repo.user_ids_for_post(post.id).await.unwrap();
    followers.sort();
    let mut expected = vec![author.id, reader.id];
    expected.sort();
    assert_eq!(followers, expected);

    Ok(())
}

#[tokio::test]
async fn existing_followers_are_left_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;
    factory::helpers::add_follower(db, post.id, author.id).await?;

    let repo = FollowerRepository::new(db);
    repo.add_followers(post.id, &[author.id], Some(author.id))
        .await
        .unwrap();

    assert_eq!(repo.user_ids_for_post(post.id).await.unwrap(), vec![author.id]);

    Ok(())
}

#[tokio::test]
async fn empty_input_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let post = factory::create_post(db, author.id).await?;

    let repo = FollowerRepository::new(db);
    repo.add_followers(post.id, &[], None).await.unwrap();

    assert!(repo.user_ids_for_post(post.id).await.unwrap().is_empty());

    Ok(())
}
