use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::data::project::ProjectRepository;

#[tokio::test]
async fn contributor_exists_reflects_project_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let contributor = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let community = factory::create_community(db).await?;
    let project = factory::create_project(db, creator.id, community.id).await?;
    factory::helpers::add_project_member(db, project.id, contributor.id).await?;

    let repo = ProjectRepository::new(db);
    assert!(repo.contributor_exists(project.id, contributor.id).await.unwrap());
    assert!(!repo.contributor_exists(project.id, outsider.id).await.unwrap());

    Ok(())
}

#[tokio::test]
async fn community_member_exists_reflects_community_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_project_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let community = factory::create_community(db).await?;
    factory::helpers::add_community_member(db, community.id, member.id).await?;

    let repo = ProjectRepository::new(db);
    assert!(repo.community_member_exists(community.id, member.id).await.unwrap());
    assert!(!repo.community_member_exists(community.id, outsider.id).await.unwrap());

    Ok(())
}
