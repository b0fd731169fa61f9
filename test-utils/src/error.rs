use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database error during test database setup or table creation.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
