//! Authentication service - checks credentials and issues session tokens.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use common::{AppError, AppResult, OptionExt};
use domain::{Role, LOGIN_INVALID_CREDENTIALS, LOGIN_USER_NOT_FOUND};
use user_service_lib::UserRepository;

use crate::credentials::CredentialVerifier;

/// Identity and session token returned after a successful login.
#[derive(Clone, Serialize)]
pub struct AuthResult {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

impl std::fmt::Debug for AuthResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResult")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate by email and plain-text password
    async fn authenticate(&self, email: String, password: String) -> AppResult<AuthResult>;
}

/// Concrete implementation of AuthService
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    credentials: Arc<dyn CredentialVerifier>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, credentials: Arc<dyn CredentialVerifier>) -> Self {
        Self { users, credentials }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn authenticate(&self, email: String, password: String) -> AppResult<AuthResult> {
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_not_exists(LOGIN_USER_NOT_FOUND)?;

        let password_valid = user
            .password_hash
            .as_deref()
            .is_some_and(|hash| self.credentials.password_matches(&password, hash));

        if !password_valid {
            warn!("Login rejected: invalid credentials");
            return Err(AppError::invalid_user_data(LOGIN_INVALID_CREDENTIALS));
        }

        let role = user.role()?;
        let token = self.credentials.issue_token(&user.email, user.role_id)?;

        info!("User logged in: {}", user.email);

        Ok(AuthResult {
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role,
            token,
        })
    }
}
