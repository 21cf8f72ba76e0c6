use axum::Router;
use axum::routing::get;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

/// JSON endpoints, collected into the OpenAPI document.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::submission::process_submission))
        .routes(routes!(handlers::health::health))
}

/// HTML and binary endpoints, outside the OpenAPI document.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/certificate/{id}",
            get(handlers::certificate::certificate_page),
        )
        .route(
            "/uploads/{category}/{filename}",
            get(handlers::artifacts::serve_artifact),
        )
}
