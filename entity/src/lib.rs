//! SeaORM entity definitions for the commons database schema.

pub mod prelude;

pub mod activity;
pub mod comment;
pub mod community;
pub mod community_membership;
pub mod follower;
pub mod post;
pub mod project;
pub mod project_membership;
pub mod thank;
pub mod user;
