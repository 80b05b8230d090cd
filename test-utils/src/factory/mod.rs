//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
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
//!     let user = factory::create_user(&db).await?;
//!     let task = factory::create_task(&db, user.id).await?;
//!
//!     // Or both at once
//!     let (user, task) = factory::helpers::create_task_with_user(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `task` - Create task entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod task;
pub mod user;

pub use task::create_task;
pub use user::create_user;
