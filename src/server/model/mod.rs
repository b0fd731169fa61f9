pub mod activity;
pub mod comment;
pub mod job;
pub mod user;
