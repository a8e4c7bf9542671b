//! Application-level errors
//!
//! The domain store itself never fails (misses are `None`, duplicates are
//! dropped), so this is where the error stack starts: everything that can
//! go wrong lives at the loading/config boundary.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("catalog source not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("malformed row {path}:{line}: a record needs at least a name and a description")]
    MalformedRow { path: PathBuf, line: usize },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
