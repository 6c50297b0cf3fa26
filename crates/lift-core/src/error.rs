//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CoreError` via `From` impls, or keep them separate and wrap `CoreError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::floor::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A call named a floor the building does not have.  Raised instead of
    /// trusting call sources to pre-validate.
    #[error("floor {floor} outside building range F0..={top}")]
    FloorOutOfRange { floor: Floor, top: Floor },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
