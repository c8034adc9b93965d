//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (database, tokens).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A business rule on user data was violated
    #[error("{0}")]
    InvalidUserData(String),

    /// A role id that is not part of the role catalogue
    #[error("Unknown role id: {0}")]
    UnknownRole(i64),

    /// Password hashing failed
    #[error("Password error: {0}")]
    Password(String),
}

impl DomainError {
    /// Create an invalid user data error
    pub fn invalid_user_data(msg: impl Into<String>) -> Self {
        DomainError::InvalidUserData(msg.into())
    }

    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
