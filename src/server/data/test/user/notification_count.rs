use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::user::UserRepository;

#[tokio::test]
async fn increments_the_unseen_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.increment_new_notification_count(user.id).await.unwrap();
    repo.increment_new_notification_count(user.id).await.unwrap();

    let updated = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(updated.new_notification_count, 2);

    Ok(())
}
