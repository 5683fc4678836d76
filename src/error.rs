use thiserror::Error;

/// Failure taxonomy shared by every service operation.
///
/// `Validation`, `DuplicateSlug` and `NotFound` carry a message that is safe to
/// show to the caller. `Internal` wraps whatever went wrong underneath and is
/// never shown verbatim.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    DuplicateSlug(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type FolioResult<T> = Result<T, FolioError>;

impl FolioError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn duplicate_slug(msg: impl Into<String>) -> Self {
        Self::DuplicateSlug(msg.into())
    }
}

impl From<rusqlite::Error> for FolioError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.into())
    }
}

/// True when SQLite rejected a write because of a UNIQUE constraint.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
