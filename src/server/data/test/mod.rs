mod activity;
mod comment;
mod follower;
mod post;
mod project;
mod thank;
mod user;
