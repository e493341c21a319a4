//! Workspace error type.
//!
//! The steering core itself cannot fail: degenerate inputs produce zero
//! vectors.  Errors only arise when validating configuration, so sub-crates
//! wrap `SnError` as one variant of their own enum.

use thiserror::Error;

/// The base error type for `sn-core` and the crates above it.
#[derive(Debug, Error)]
pub enum SnError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{what} contains a non-finite value")]
    NonFinite { what: &'static str },
}

/// Shorthand result type for all `sn-*` crates.
pub type SnResult<T> = Result<T, SnError>;
