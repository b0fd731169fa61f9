pub mod analytics;
pub mod auth;
pub mod comment;
pub mod email;
pub mod notification;
pub mod queue;

#[cfg(test)]
mod test;
