use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::comment::CommentRepository;

#[tokio::test]
async fn marks_comment_inactive_with_audit_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _post, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let moderator = factory::create_user(db).await?;
    let original_text = comment.comment_text.clone();
    assert_ne!(moderator.id, author.id);

    let deactivated = CommentRepository::new(db)
        .deactivate(comment, moderator.id)
        .await
        .unwrap();

    assert!(!deactivated.active);
    assert_eq!(deactivated.deactivated_by_id, Some(moderator.id));
    assert!(deactivated.deactivated_on.is_some());
    // the text is retained for the audit trail
    assert_eq!(deactivated.comment_text, original_text);

    Ok(())
}
