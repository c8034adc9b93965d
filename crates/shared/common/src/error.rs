//! Unified error handling for the user and auth services.
//!
//! Provides a single error type whose variants follow the use-case error
//! taxonomy. Translation to transport responses belongs to the caller; this
//! module only offers a stable code and a safe user-facing message.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Use-case errors
    #[error("{0}")]
    InvalidUserData(String),

    #[error("{0}")]
    UserAlreadyExists(String),

    #[error("{0}")]
    UserNotExists(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "jwt")]
    #[error("Token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Setup
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidUserData(_) => "INVALID_USER_DATA",
            AppError::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            AppError::UserNotExists(_) => "USER_NOT_EXISTS",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "TOKEN_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller can recover by correcting its input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidUserData(_) | AppError::UserAlreadyExists(_) | AppError::UserNotExists(_)
        )
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::InvalidUserData(msg)
            | AppError::UserAlreadyExists(msg)
            | AppError::UserNotExists(msg) => msg.clone(),

            // Hide details for internal/security errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {:?}", e);
                "Could not issue a session token".to_string()
            }
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidUserData(msg) => AppError::InvalidUserData(msg),
            // A stored role id outside the catalogue is a data defect, not bad input
            DomainError::UnknownRole(id) => AppError::Internal(format!("Unknown role id {}", id)),
            DomainError::Password(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_exists(self, msg: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_exists(self, msg: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::UserNotExists(msg.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn invalid_user_data(msg: impl Into<String>) -> Self {
        AppError::InvalidUserData(msg.into())
    }

    pub fn user_already_exists(msg: impl Into<String>) -> Self {
        AppError::UserAlreadyExists(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
