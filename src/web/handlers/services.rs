use crate::models::{CreateService, Service, ServiceFilter, UpdateService};
use crate::services::catalog;
use crate::services::query::parse_flag;
use crate::services::validation::optional_enum;
use crate::web::error::{ApiError, ApiResult};
use crate::web::extractors::{JsonBody, QueryParams};
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct ServiceListParams {
    pub category: Option<String>,
    pub active: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ServiceList {
    pub services: Vec<Service>,
}

/// GET /api/services
pub async fn list(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<ServiceListParams>,
) -> ApiResult<Json<ServiceList>> {
    let fail = "Failed to fetch services";
    let filter = ServiceFilter {
        category: optional_enum(params.category, "category").map_err(ApiError::failing(fail))?,
        active: parse_flag(params.active.as_deref()),
    };

    let services = catalog::list_services(&state.db, filter).map_err(ApiError::failing(fail))?;
    Ok(Json(ServiceList { services }))
}

/// POST /api/services
pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<CreateService>,
) -> ApiResult<(StatusCode, Json<Service>)> {
    let created = catalog::create_service(&state.db, input)
        .map_err(ApiError::failing("Failed to create service"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/services/:id
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Service>> {
    let found = catalog::get_service(&state.db, &id)
        .map_err(ApiError::failing("Failed to fetch service"))?;
    Ok(Json(found))
}

/// PUT /api/services/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UpdateService>,
) -> ApiResult<Json<Service>> {
    let updated = catalog::update_service(&state.db, &id, patch)
        .map_err(ApiError::failing("Failed to update service"))?;
    Ok(Json(updated))
}

/// DELETE /api/services/:id
pub async fn destroy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    catalog::delete_service(&state.db, &id)
        .map_err(ApiError::failing("Failed to delete service"))?;
    Ok(super::deleted("Service"))
}
