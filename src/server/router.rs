use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{health, task, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Taskboard API", description = "Users and the tasks they own"),
    tags(
        (name = "user", description = "User registration"),
        (name = "task", description = "Task creation and lookup by owner"),
        (name = "health", description = "Store readiness")
    )
)]
pub struct ApiDoc;

/// Builds the complete application: API routes, shared state and request tracing.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Builds the API router with its OpenAPI document served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::create_user))
        .routes(routes!(task::create_task))
        .routes(routes!(task::get_tasks_by_user))
        .routes(routes!(health::health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let (_, api) = api_router().split_for_parts();

        for path in [
            "/api/users",
            "/api/tasks",
            "/api/tasks/user/{user_id}",
            "/api/health",
        ] {
            assert!(api.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
