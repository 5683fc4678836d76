use crate::models::{Contact, ContactFilter, CreateContact, Pagination, UpdateContact};
use crate::services::contact;
use crate::services::query::PageRequest;
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
pub struct ContactListParams {
    pub status: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactList {
    pub contacts: Vec<Contact>,
    pub pagination: Pagination,
}

/// GET /api/contact
pub async fn list(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<ContactListParams>,
) -> ApiResult<Json<ContactList>> {
    let fail = "Failed to fetch contacts";
    let page = PageRequest::from_params(
        params.page.as_deref(),
        params.limit.as_deref(),
        state.config.api.default_page_size,
        state.config.api.max_page_size,
    )
    .map_err(ApiError::failing(fail))?;
    let filter = ContactFilter {
        status: optional_enum(params.status, "status").map_err(ApiError::failing(fail))?,
    };

    let (contacts, pagination) =
        contact::list_contacts(&state.db, filter, page).map_err(ApiError::failing(fail))?;
    Ok(Json(ContactList {
        contacts,
        pagination,
    }))
}

/// POST /api/contact
pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<CreateContact>,
) -> ApiResult<(StatusCode, Json<Contact>)> {
    let created = contact::create_contact(&state.db, input)
        .map_err(ApiError::failing("Failed to submit contact form"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/contact/:id
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Contact>> {
    let found = contact::get_contact(&state.db, &id)
        .map_err(ApiError::failing("Failed to fetch contact"))?;
    Ok(Json(found))
}

/// PUT /api/contact/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UpdateContact>,
) -> ApiResult<Json<Contact>> {
    let updated = contact::update_contact(&state.db, &id, patch)
        .map_err(ApiError::failing("Failed to update contact"))?;
    Ok(Json(updated))
}

/// DELETE /api/contact/:id
pub async fn destroy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    contact::delete_contact(&state.db, &id)
        .map_err(ApiError::failing("Failed to delete contact"))?;
    Ok(super::deleted("Contact"))
}
