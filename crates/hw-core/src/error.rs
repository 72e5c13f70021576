//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `hw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid frame delta {0}: must be finite and non-negative")]
    InvalidDelta(f32),
}

/// Shorthand result type for `hw-core`.
pub type CoreResult<T> = Result<T, CoreError>;
