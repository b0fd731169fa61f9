pub use super::activity::Entity as Activity;
pub use super::comment::Entity as Comment;
pub use super::community::Entity as Community;
pub use super::community_membership::Entity as CommunityMembership;
pub use super::follower::Entity as Follower;
pub use super::post::Entity as Post;
pub use super::project::Entity as Project;
pub use super::project_membership::Entity as ProjectMembership;
pub use super::thank::Entity as Thank;
pub use super::user::Entity as User;
