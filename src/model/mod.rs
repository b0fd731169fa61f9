pub mod api;
pub mod auth;
pub mod comment;
pub mod project;
