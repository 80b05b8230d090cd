use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::model::user::UserDto;

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateTaskDto {
    pub title: Option<String>,
    /// Identifier of the owning user.
    pub user: Option<String>,
}

/// Path parameters of `GET /api/tasks/user/{user_id}`.
///
/// Kept as text so a malformed identifier reaches validation.
#[derive(Debug, Clone, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct TaskOwnerPath {
    /// Identifier of the user whose tasks to list.
    pub user_id: String,
}

/// A task as stored, with the owner as a bare identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: Uuid,
    pub title: String,
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A task with its owner resolved into the full user record.
///
/// `user` is `None` when the referenced user does not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithUserDto {
    pub id: Uuid,
    pub title: String,
    pub user: Option<UserDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
