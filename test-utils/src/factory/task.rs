//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test tasks with customizable fields.
///
/// The owning user is not required to exist, mirroring the store which keeps
/// no foreign key on `tasks.user_id`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::task::TaskFactory;
///
/// let task = TaskFactory::new(&db, user.id)
///     .title("Water the plants")
///     .build()
///     .await?;
/// ```
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    title: String,
}

impl<'a> TaskFactory<'a> {
    /// Creates a new TaskFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Task {n}"` where n is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the user the task belongs to
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            title: format!("Task {}", next_id()),
        }
    }

    /// Sets the title for the task.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the task entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::task::Model)` - Created task entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        let now = Utc::now();
        entity::task::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task with default values for the given user.
///
/// Shorthand for `TaskFactory::new(db, user_id).build().await`.
pub async fn create_task(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, user_id).build().await
}
