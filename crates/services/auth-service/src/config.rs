//! Auth service configuration.

use std::env;

use common::{AppError, AppResult, JwtConfig};
use domain::DEFAULT_JWT_EXPIRATION_MINUTES;

/// Auth service configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    pub jwt: JwtConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        let secret = env::var("JWT_SECRET")
            .or_else(|_| env::var("AUTH_SERVICE_JWT_SECRET"))
            .ok();
        let expiration = env::var("JWT_EXPIRATION_MINUTES").ok();

        Self::from_values(secret, expiration)
    }

    /// Build from raw setting values; `None` means the variable is unset.
    pub fn from_values(secret: Option<String>, expiration: Option<String>) -> AppResult<Self> {
        let secret = secret.ok_or_else(|| AppError::config("JWT_SECRET must be set"))?;

        let expiration_minutes = match expiration {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::config(format!(
                    "JWT_EXPIRATION_MINUTES must be a whole number of minutes, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_JWT_EXPIRATION_MINUTES,
        };

        let config = Self {
            jwt: JwtConfig {
                secret,
                expiration_minutes,
            },
        };
        config.jwt.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_expiration_defaults_when_unset() {
        let config = AuthServiceConfig::from_values(Some(SECRET.to_string()), None).unwrap();
        assert_eq!(config.jwt.expiration_minutes, DEFAULT_JWT_EXPIRATION_MINUTES);
    }

    #[test]
    fn test_expiration_parsed_when_set() {
        let config =
            AuthServiceConfig::from_values(Some(SECRET.to_string()), Some("45".to_string()))
                .unwrap();
        assert_eq!(config.jwt.expiration_minutes, 45);
    }

    #[test]
    fn test_unparseable_expiration_is_config_error() {
        let result =
            AuthServiceConfig::from_values(Some(SECRET.to_string()), Some("twenty".to_string()));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_secret_is_config_error() {
        let result = AuthServiceConfig::from_values(None, None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
