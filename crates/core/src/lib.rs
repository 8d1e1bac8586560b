//! Shared primitives for all Rust crates in the SEDAPAL backend.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across SEDAPAL crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state, such as a duplicate email.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Supplied credentials did not match an active account.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Outbound email transport rejected or failed to deliver a message.
    #[error("delivery error: {0}")]
    Delivery(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the human-readable message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Unauthorized(message)
            | Self::Delivery(message)
            | Self::Internal(message) => message.as_str(),
        }
    }

    /// Returns a stable name for the error category.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::NotFound(_) => "NotFoundError",
            Self::Conflict(_) => "ConflictError",
            Self::Unauthorized(_) => "UnauthorizedError",
            Self::Delivery(_) => "NotificationDeliveryError",
            Self::Internal(_) => "InternalError",
        }
    }
}
