//! Task domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::task::{CreateTaskDto, TaskDto, TaskOwnerPath, TaskWithUserDto},
    server::{
        error::AppError, model::user::User, util::parse::parse_validated_identifier,
        validation::Validate,
    },
};

/// A task as stored, referencing its owner by identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    /// Identifier of the owning user. Not guaranteed to resolve.
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Converts the task domain model to a DTO for API responses.
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            title: self.title,
            user: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a task domain model at the repository boundary.
    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            user_id: entity.user_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A task with its owner populated.
///
/// `user` is `None` when the referenced user could not be found.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskWithUser {
    pub task: Task,
    pub user: Option<User>,
}

impl TaskWithUser {
    /// Converts to a DTO, embedding the owner in place of its identifier.
    pub fn into_dto(self) -> TaskWithUserDto {
        TaskWithUserDto {
            id: self.task.id,
            title: self.task.title,
            user: self.user.map(User::into_dto),
            created_at: self.task.created_at,
            updated_at: self.task.updated_at,
        }
    }
}

/// Parameters for creating a task.
#[derive(Debug, Clone)]
pub struct CreateTaskParam {
    pub title: String,
    pub user_id: Uuid,
}

impl CreateTaskParam {
    /// Validates the request DTO and converts it into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateTaskParam)` - The request passed every rule
    /// - `Err(AppError::Validation)` - Title missing or blank, or `user` not an identifier
    pub fn from_dto(dto: CreateTaskDto) -> Result<Self, AppError> {
        dto.validate()?;

        let user_id = parse_validated_identifier("user", dto.user.as_deref())?;

        Ok(Self {
            title: dto.title.unwrap_or_default(),
            user_id,
        })
    }
}

/// Parameters for listing the tasks owned by one user.
#[derive(Debug, Clone)]
pub struct GetTasksByUserParam {
    pub user_id: Uuid,
}

impl GetTasksByUserParam {
    /// Validates the path parameters and converts them into query parameters.
    ///
    /// # Returns
    /// - `Ok(GetTasksByUserParam)` - The path carried a valid identifier
    /// - `Err(AppError::Validation)` - The path segment is not an identifier
    pub fn from_path(path: TaskOwnerPath) -> Result<Self, AppError> {
        path.validate()?;

        let user_id = parse_validated_identifier("userId", Some(&path.user_id))?;

        Ok(Self { user_id })
    }
}
