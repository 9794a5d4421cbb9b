//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Reasons a single node token is rejected by the validator.
/// These carry no line information; the tokenizer attaches it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("name too long: {0} characters")]
    TooLong(usize),

    #[error("mixed slash characters in name")]
    MixedSeparators,

    #[error("multi-dir line detected")]
    MultiSegment,

    #[error("the name is empty")]
    Empty,

    #[error("invalid directory name: {0}")]
    Reserved(String),
}

/// Domain errors represent TreeScript syntax and structure violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid indentation on line {line}")]
    InvalidIndentation { line: usize },

    #[error("invalid node on line {line}: {source}")]
    InvalidNode {
        line: usize,
        #[source]
        source: NameError,
    },

    #[error("jumped {delta} steps in the tree on line: {line}")]
    DepthJump { delta: usize, line: usize },

    #[error("parent path mixes slash characters: {0}")]
    MixedParentSeparators(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
