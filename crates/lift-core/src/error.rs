//! Simulator error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    /// A requested floor lies outside `[1, total_floors]`.
    ///
    /// Recoverable: the request is rejected and no state changes.
    #[error("Floor must be between 1 and {total_floors}")]
    InvalidFloor { floor: i32, total_floors: u32 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LiftError {
    /// `true` for the recoverable out-of-range request error.
    pub fn is_invalid_floor(&self) -> bool {
        matches!(self, LiftError::InvalidFloor { .. })
    }
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
