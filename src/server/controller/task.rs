use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ViolationDto},
        task::{CreateTaskDto, TaskDto, TaskOwnerPath, TaskWithUserDto},
    },
    server::{
        error::AppError,
        model::task::{CreateTaskParam, GetTasksByUserParam, TaskWithUser},
        service::task::TaskService,
        state::AppState,
        validation::Violation,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// Create a new task.
///
/// Validates the title and the shape of the owning user's identifier. The
/// owner is not required to exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Task creation data, or the rejection if the body was not valid JSON
///
/// # Returns
/// - `200 OK` - Successfully created task
/// - `400 Bad Request` - Title missing or blank, or `user` not a valid identifier
/// - `500 Internal Server Error` - Database error
/// - `503 Service Unavailable` - No store connection
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 200, description = "Successfully created task", body = ApiResponse<TaskDto>),
        (status = 400, description = "Request failed validation", body = ApiResponse<Vec<ViolationDto>>),
        (status = 500, description = "Internal server error", body = ApiResponse<ErrorDto>),
        (status = 503, description = "Store unavailable", body = ApiResponse<ErrorDto>)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateTaskParam::from_dto(payload)?;

    let service = TaskService::new(state.db()?);

    let task = service.create(params).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(task.into_dto()))))
}

/// Get all tasks for a user.
///
/// Returns every task whose owner is the given user, with the owner embedded
/// as a full user record. A user with no tasks gets an empty list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `path` - Path parameters carrying the user's identifier, or the rejection
///   if the segment could not be decoded
///
/// # Returns
/// - `200 OK` - Tasks with their owner populated
/// - `400 Bad Request` - The path segment is not a valid identifier
/// - `500 Internal Server Error` - Database error
/// - `503 Service Unavailable` - No store connection
#[utoipa::path(
    get,
    path = "/api/tasks/user/{user_id}",
    tag = TASK_TAG,
    params(TaskOwnerPath),
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = ApiResponse<Vec<TaskWithUserDto>>),
        (status = 400, description = "Malformed user identifier", body = ApiResponse<Vec<ViolationDto>>),
        (status = 500, description = "Internal server error", body = ApiResponse<ErrorDto>),
        (status = 503, description = "Store unavailable", body = ApiResponse<ErrorDto>)
    ),
)]
pub async fn get_tasks_by_user(
    State(state): State<AppState>,
    path: Result<Path<TaskOwnerPath>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(path) = path.map_err(|rejection| {
        AppError::Validation(vec![Violation::malformed_path(
            "userId",
            rejection.body_text(),
        )])
    })?;

    let params = GetTasksByUserParam::from_path(path)?;

    let service = TaskService::new(state.db()?);

    let tasks = service.get_by_user(params).await?;

    let tasks_dto: Vec<_> = tasks.into_iter().map(TaskWithUser::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::success(tasks_dto))))
}
