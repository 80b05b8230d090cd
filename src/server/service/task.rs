//! Task service for business logic.
//!
//! Owners are stored on tasks as bare identifiers. Listing resolves them with a
//! second query against the users table instead of a SQL join, since the
//! reference is not a foreign key and may dangle.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{task::TaskRepository, user::UserRepository},
    error::AppError,
    model::{
        task::{CreateTaskParam, GetTasksByUserParam, Task, TaskWithUser},
        user::User,
    },
};

/// Service providing business logic for tasks.
pub struct TaskService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    /// Creates a new TaskService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new task.
    ///
    /// The owning user is not looked up; any well-formed identifier is accepted.
    ///
    /// # Returns
    /// - `Ok(Task)` - The created task
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTaskParam) -> Result<Task, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let task = task_repo.create(param).await?;
        Ok(task)
    }

    /// Retrieves every task owned by a user, each with its owner populated.
    ///
    /// # Arguments
    /// - `param` - Parameters containing the owner's identifier
    ///
    /// # Returns
    /// - `Ok(Vec<TaskWithUser>)` - Tasks oldest first (empty if the user has none)
    /// - `Err(AppError::DbErr)` - Database error during either query
    pub async fn get_by_user(
        &self,
        param: GetTasksByUserParam,
    ) -> Result<Vec<TaskWithUser>, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let tasks = task_repo.get_by_user_id(param.user_id).await?;

        self.populate_users(tasks).await
    }

    /// Resolves each task's owner identifier into the full user record.
    async fn populate_users(&self, tasks: Vec<Task>) -> Result<Vec<TaskWithUser>, AppError> {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let mut user_ids: Vec<Uuid> = tasks.iter().map(|t| t.user_id).collect();
        user_ids.sort();
        user_ids.dedup();

        let user_repo = UserRepository::new(self.db);
        let users: HashMap<Uuid, User> = user_repo
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(tasks
            .into_iter()
            .map(|task| {
                let user = users.get(&task.user_id).cloned();
                TaskWithUser { task, user }
            })
            .collect())
    }
}
