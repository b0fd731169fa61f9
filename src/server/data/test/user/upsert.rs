use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::user::UserRepository;
use crate::server::model::user::UpsertUserParams;

#[tokio::test]
async fn inserts_a_new_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .upsert(UpsertUserParams {
            name: String::from("Ada"),
            email: String::from("ada@example.com"),
            avatar_url: Some(String::from("https://example.com/ada.png")),
        })
        .await
        .unwrap();

    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.new_notification_count, 0);

    Ok(())
}

#[tokio::test]
async fn refreshes_profile_for_a_known_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .name("Old Name")
        .email("ada@example.com")
        .new_notification_count(3)
        .build()
        .await?;

    let user = UserRepository::new(db)
        .upsert(UpsertUserParams {
            name: String::from("New Name"),
            email: String::from("ada@example.com"),
            avatar_url: Some(String::from("https://example.com/new.png")),
        })
        .await
        .unwrap();

    assert_eq!(user.id, existing.id);
    assert_eq!(user.name, "New Name");
    assert_eq!(user.avatar_url.as_deref(), Some("https://example.com/new.png"));
    // unread notifications survive a fresh login
    assert_eq!(user.new_notification_count, 3);

    Ok(())
}
