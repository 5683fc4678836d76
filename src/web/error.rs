use crate::error::FolioError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Error envelope returned by every API route: `{ "error": "<message>" }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Maps a service failure. Internal faults are logged and replaced by
    /// `failure`, so store details never reach the client.
    pub fn failing(failure: &'static str) -> impl FnOnce(FolioError) -> ApiError {
        move |err| match err {
            FolioError::Validation(msg) | FolioError::DuplicateSlug(msg) => {
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            FolioError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            FolioError::Internal(e) => {
                tracing::error!("{}: {:?}", failure, e);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, "Invalid request body")
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, "Invalid query parameters")
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
