//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign key dependencies through explicit
//! arguments; `helpers` provides shortcuts that create whole dependency
//! chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let post = factory::post::create_post(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (author, post, comment) =
//!         factory::helpers::create_comment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod comment;
pub mod community;
pub mod helpers;
pub mod post;
pub mod project;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use comment::create_comment;
pub use community::create_community;
pub use post::create_post;
pub use project::create_project;
pub use user::create_user;
