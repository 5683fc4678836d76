use super::error::ApiError;
use super::handlers;
use super::state::AppState;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route(
            "/api/blogs",
            get(handlers::blogs::list).post(handlers::blogs::create),
        )
        .route(
            "/api/blogs/:id",
            get(handlers::blogs::show)
                .put(handlers::blogs::update)
                .delete(handlers::blogs::destroy),
        )
        .route(
            "/api/contact",
            get(handlers::contacts::list).post(handlers::contacts::create),
        )
        .route(
            "/api/contact/:id",
            get(handlers::contacts::show)
                .put(handlers::contacts::update)
                .delete(handlers::contacts::destroy),
        )
        .route(
            "/api/services",
            get(handlers::services::list).post(handlers::services::create),
        )
        .route(
            "/api/services/:id",
            get(handlers::services::show)
                .put(handlers::services::update)
                .delete(handlers::services::destroy),
        )
}

pub async fn not_found() -> impl IntoResponse {
    ApiError::new(StatusCode::NOT_FOUND, "Not Found")
}
