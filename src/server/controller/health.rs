use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ApiResponse,
        health::{HealthDto, StoreStatus},
    },
    server::state::AppState,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report whether the store is reachable.
///
/// Pings the store when a connection was established at startup.
///
/// # Returns
/// - `200 OK` - Store connected and answering
/// - `503 Service Unavailable` - No store connection, or the ping failed
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Store is ready", body = ApiResponse<HealthDto>),
        (status = 503, description = "Store is unavailable", body = ApiResponse<HealthDto>)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let ready = match state.db() {
        Ok(db) => match db.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Store ping failed: {}", e);
                false
            }
        },
        Err(_) => false,
    };

    if ready {
        (
            StatusCode::OK,
            Json(ApiResponse::success(HealthDto {
                store: StoreStatus::Ready,
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::failure(HealthDto {
                store: StoreStatus::Unavailable,
            })),
        )
    }
}
