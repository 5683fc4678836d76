use crate::web::error::{ApiError, ApiResult};
use crate::web::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> ApiResult<Json<serde_json::Value>> {
    state.db.ping().map_err(|e| {
        tracing::error!("Health check failed: {:?}", e);
        ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
    })?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "site": state.config.site.title,
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
