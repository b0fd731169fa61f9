use chrono::Utc;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::error::{AppError, AuthError};
use crate::server::middleware::project::ProjectGuard;

#[tokio::test]
async fn creator_always_gets_through() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let community = factory::create_community(db).await?;
    // a draft, the most restricted case
    let project = factory::create_project(db, creator.id, community.id).await?;

    let found = ProjectGuard::new(db)
        .require(&creator, project.id)
        .await
        .unwrap();
    assert_eq!(found.id, project.id);

    Ok(())
}

#[tokio::test]
async fn draft_is_visible_only_to_contributors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let contributor = factory::create_user(db).await?;
    let community_member = factory::create_user(db).await?;
    let community = factory::create_community(db).await?;
    let project = factory::create_project(db, creator.id, community.id).await?;
    factory::helpers::add_project_member(db, project.id, contributor.id).await?;
    factory::helpers::add_community_member(db, community.id, community_member.id).await?;

    let guard = ProjectGuard::new(db);
    assert!(guard.require(&contributor, project.id).await.is_ok());

    // community membership is not enough while the project is a draft
    let denied = guard.require(&community_member, project.id).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

#[tokio::test]
async fn published_public_project_is_visible_to_anyone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let community = factory::create_community(db).await?;
    let project = factory::project::ProjectFactory::new(db, creator.id, community.id)
        .public(true)
        .published_at(Some(Utc::now()))
        .build()
        .await?;

    assert!(ProjectGuard::new(db)
        .require(&stranger, project.id)
        .await
        .is_ok());

    Ok(())
}

#[tokio::test]
async fn published_private_project_requires_community_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let community = factory::create_community(db).await?;
    let project = factory::project::ProjectFactory::new(db, creator.id, community.id)
        .public(false)
        .published_at(Some(Utc::now()))
        .build()
        .await?;
    factory::helpers::add_community_member(db, community.id, member.id).await?;

    let guard = ProjectGuard::new(db);
    assert!(guard.require(&member, project.id).await.is_ok());

    let denied = guard.require(&stranger, project.id).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

#[tokio::test]
async fn missing_project_is_not_found_rather_than_denied() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ProjectGuard::new(db).require(&user, 404).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
