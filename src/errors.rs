// errors.rs
use thiserror::Error;

/// Errors surfaced by every data-access call.
///
/// Lookups that can legitimately find nothing return `Option`/`Vec` instead of
/// `NotFound`; `NotFound` is reserved for statements that must yield a row
/// (e.g. `INSERT ... RETURNING`).
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Not Found")]
    NotFound,

    #[error("Failed to open database {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database Error: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("Failed to read schema file {path}: {source}")]
    Schema {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal Error")]
    Internal,
}

// Type alias used by every data-access function.
pub type DbResult<T> = Result<T, DbError>;

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound,
            other => DbError::Query(other),
        }
    }
}
