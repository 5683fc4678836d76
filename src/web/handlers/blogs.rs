use crate::models::{Blog, BlogFilter, BlogSummary, CreateBlog, Pagination, UpdateBlog};
use crate::services::blog;
use crate::services::query::{parse_flag, PageRequest};
use crate::web::error::{ApiError, ApiResult};
use crate::web::extractors::{JsonBody, QueryParams};
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct BlogListParams {
    pub published: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlogList {
    pub blogs: Vec<BlogSummary>,
    pub pagination: Pagination,
}

/// GET /api/blogs
pub async fn list(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<BlogListParams>,
) -> ApiResult<Json<BlogList>> {
    let fail = "Failed to fetch blogs";
    let page = PageRequest::from_params(
        params.page.as_deref(),
        params.limit.as_deref(),
        state.config.api.default_page_size,
        state.config.api.max_page_size,
    )
    .map_err(ApiError::failing(fail))?;
    let filter = BlogFilter {
        published: parse_flag(params.published.as_deref()),
    };

    let (blogs, pagination) =
        blog::list_blogs(&state.db, filter, page).map_err(ApiError::failing(fail))?;
    Ok(Json(BlogList { blogs, pagination }))
}

/// POST /api/blogs
pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(input): JsonBody<CreateBlog>,
) -> ApiResult<(StatusCode, Json<Blog>)> {
    let created = blog::create_blog(&state.db, input, &state.config.site.author)
        .map_err(ApiError::failing("Failed to create blog"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/blogs/:id
pub async fn show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Blog>> {
    let found = blog::get_blog(&state.db, &id).map_err(ApiError::failing("Failed to fetch blog"))?;
    Ok(Json(found))
}

/// PUT /api/blogs/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UpdateBlog>,
) -> ApiResult<Json<Blog>> {
    let updated = blog::update_blog(&state.db, &id, patch)
        .map_err(ApiError::failing("Failed to update blog"))?;
    Ok(Json(updated))
}

/// DELETE /api/blogs/:id
pub async fn destroy(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    blog::delete_blog(&state.db, &id).map_err(ApiError::failing("Failed to delete blog"))?;
    Ok(super::deleted("Blog"))
}
