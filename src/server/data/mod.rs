//! Repository layer. Each repository borrows any [`ConnectionTrait`]
//! implementor, so services can run them against the shared connection
//! or an open transaction.

pub mod activity;
pub mod comment;
pub mod follower;
pub mod post;
pub mod project;
pub mod thank;
pub mod user;

#[cfg(test)]
mod test;
