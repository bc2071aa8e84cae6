//! Errors raised by the crate itself.

use thiserror::Error;

/// A serialized outcome that violates the one-field-present rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("outcome carries both a value and an error")]
    Both,

    /// `error` is null and the payload type cannot be read from null.
    #[error("outcome carries neither a value nor an error")]
    Neither,
}
