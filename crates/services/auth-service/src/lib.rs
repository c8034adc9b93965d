//! Auth Service Library
//!
//! Email/password authentication over the user store, issuing JWT
//! session tokens.

pub mod config;
pub mod credentials;
pub mod service;

use std::sync::Arc;

use common::AppResult;
use user_service_lib::UserRepository;

use crate::config::AuthServiceConfig;
use crate::credentials::JwtCredentials;

pub use credentials::{Claims, CredentialVerifier};
pub use service::{AuthResult, AuthService, Authenticator};

/// Wire an `Authenticator` over the given user repository.
pub fn authenticator(
    config: &AuthServiceConfig,
    users: Arc<dyn UserRepository>,
) -> AppResult<Authenticator> {
    let credentials = JwtCredentials::new(&config.jwt)?;
    Ok(Authenticator::new(users, Arc::new(credentials)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{AppError, JwtConfig};
    use user_service_lib::repository::MockUserRepository;

    #[test]
    fn test_authenticator_rejects_short_secret() {
        let config = AuthServiceConfig {
            jwt: JwtConfig {
                secret: "short".to_string(),
                ..JwtConfig::default()
            },
        };

        let result = authenticator(&config, Arc::new(MockUserRepository::new()));

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_authenticator_builds_with_valid_config() {
        let config = AuthServiceConfig {
            jwt: JwtConfig {
                secret: "0123456789abcdef0123456789abcdef".to_string(),
                ..JwtConfig::default()
            },
        };

        assert!(authenticator(&config, Arc::new(MockUserRepository::new())).is_ok());
    }
}
