//! User registration handlers.
//!
//! A username that is already taken, compared case-insensitively, is answered
//! with 409 Conflict and a `"failure"` envelope, not a 500.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ViolationDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::AppError, model::user::CreateUserParam, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a new user.
///
/// Validates that a username was provided, then stores it lowercased. Usernames
/// are unique regardless of case.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User creation data, or the rejection if the body was not valid JSON
///
/// # Returns
/// - `200 OK` - Successfully created user
/// - `400 Bad Request` - Username missing or blank, or body not valid JSON
/// - `409 Conflict` - Username already taken
/// - `500 Internal Server Error` - Database error
/// - `503 Service Unavailable` - No store connection
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Successfully created user", body = ApiResponse<UserDto>),
        (status = 400, description = "Request failed validation", body = ApiResponse<Vec<ViolationDto>>),
        (status = 409, description = "Username already taken", body = ApiResponse<ErrorDto>),
        (status = 500, description = "Internal server error", body = ApiResponse<ErrorDto>),
        (status = 503, description = "Store unavailable", body = ApiResponse<ErrorDto>)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    // Validate before touching the store
    let params = CreateUserParam::from_dto(payload)?;

    let service = UserService::new(state.db()?);

    let user = service.create(params).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(user.into_dto()))))
}
