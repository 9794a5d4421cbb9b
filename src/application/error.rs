//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add input-handling context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("the file does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("symlink file paths are disabled: {0}")]
    SymlinkDisabled(PathBuf),

    #[error("file larger than {limit} byte limit: {path}")]
    FileTooLarge { path: PathBuf, limit: u64 },

    #[error("the input file is empty: {0}")]
    EmptyInput(PathBuf),

    #[error("parent path prefix too long: {0} characters")]
    ParentPathTooLong(usize),

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
