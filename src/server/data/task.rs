//! Task data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::task::{CreateTaskParam, Task};

/// Repository providing database operations for tasks.
///
/// The owning user is stored as a plain identifier; this repository never
/// checks that it resolves.
pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    /// Creates a new TaskRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new task with a generated identifier and fresh timestamps.
    ///
    /// # Returns
    /// - `Ok(Task)` - The created task
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTaskParam) -> Result<Task, DbErr> {
        let now = Utc::now();

        let entity = entity::task::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(param.title),
            user_id: ActiveValue::Set(param.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(entity))
    }

    /// Gets every task owned by the given user, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Task>)` - Tasks for the user (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_id(&self, user_id: Uuid) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::Task::find()
            .filter(entity::task::Column::UserId.eq(user_id))
            .order_by_asc(entity::task::Column::CreatedAt)
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }
}
