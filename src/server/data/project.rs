use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(id).one(self.conn).await
    }

    pub async fn contributor_exists(
        &self,
        project_id: i32,
        user_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::ProjectMembership::find()
            .filter(entity::project_membership::Column::ProjectId.eq(project_id))
            .filter(entity::project_membership::Column::UserId.eq(user_id))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }

    pub async fn community_member_exists(
        &self,
        community_id: i32,
        user_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::CommunityMembership::find()
            .filter(entity::community_membership::Column::CommunityId.eq(community_id))
            .filter(entity::community_membership::Column::UserId.eq(user_id))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }
}
