//! Error types for the tree crate.

use thiserror::Error;

/// Errors produced by tree serialization and parsing.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The input document is not a valid serialized diff tree.
    #[error("invalid diff tree document: {0}")]
    Parse(String),

    /// The top-level node of a parsed document is not a directory.
    #[error("root node must be a directory")]
    RootNotDirectory,

    /// A kind name outside the stable four-name enumeration.
    #[error("unknown record kind: {0}")]
    UnknownKind(String),

    /// Writing serialized output to an I/O sink failed.
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),

    /// Serialization error unrelated to the output sink.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for tree results.
pub type TreeResult<T> = Result<T, TreeError>;
