//! Errors raised by the extraction pipeline.

use thiserror::Error;

/// Failure that makes a whole source file unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    /// A `@param` or `@return` lacks its required words and the strict
    /// policy is active.
    #[error("{source_path}: comment block #{block}: malformed @{tag} tag: {rest:?}")]
    MalformedTag {
        source_path: String,
        block: usize,
        tag: String,
        rest: String,
    },
}

/// What to do with a `@param`/`@return` that lacks its required words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Drop the tag and keep the rest of the block.
    #[default]
    Skip,
    /// Reject the whole file.
    Fail,
}

pub type Result<T> = std::result::Result<T, DocError>;
