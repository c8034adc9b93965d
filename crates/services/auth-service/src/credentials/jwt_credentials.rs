//! Argon2 password checks and HS256 session tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, JwtConfig};
use domain::Password;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email
    pub sub: String,
    pub email: String,
    pub role_id: i64,
    pub iat: i64,
    pub exp: i64,
}

/// Credential checks the authentication use case depends on.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialVerifier: Send + Sync {
    /// True when `plain` hashes to `hashed`.
    fn password_matches(&self, plain: &str, hashed: &str) -> bool;

    /// Issue a signed session token for the given identity.
    fn issue_token(&self, email: &str, role_id: i64) -> AppResult<String>;
}

/// JWT-backed credential verifier.
pub struct JwtCredentials {
    encoding_key: EncodingKey,
    expiration_minutes: i64,
}

impl JwtCredentials {
    /// Build from config; rejects short secrets and non-positive expiry.
    pub fn new(config: &JwtConfig) -> AppResult<Self> {
        config.validate()?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            expiration_minutes: config.expiration_minutes,
        })
    }
}

impl CredentialVerifier for JwtCredentials {
    fn password_matches(&self, plain: &str, hashed: &str) -> bool {
        Password::from_hash(hashed).verify(plain)
    }

    fn issue_token(&self, email: &str, role_id: i64) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = Duration::try_minutes(self.expiration_minutes)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| AppError::internal("Token expiry out of range"))?;

        let claims = Claims {
            sub: email.to_string(),
            email: email.to_string(),
            role_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ROLE_ADMIN_ID, SECONDS_PER_MINUTE};
    use jsonwebtoken::{decode, DecodingKey, Validation};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn credentials(expiration_minutes: i64) -> JwtCredentials {
        JwtCredentials::new(&JwtConfig {
            secret: SECRET.to_string(),
            expiration_minutes,
        })
        .unwrap()
    }

    #[test]
    fn test_issue_token_carries_identity_claims() {
        let token = credentials(20).issue_token("john@x.com", ROLE_ADMIN_ID).unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(data.claims.sub, "john@x.com");
        assert_eq!(data.claims.email, "john@x.com");
        assert_eq!(data.claims.role_id, ROLE_ADMIN_ID);
        assert_eq!(data.claims.exp - data.claims.iat, 20 * SECONDS_PER_MINUTE);
    }

    #[test]
    fn test_token_rejected_with_other_secret() {
        let token = credentials(20).issue_token("john@x.com", ROLE_ADMIN_ID).unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"another-secret-another-secret-00"),
            &Validation::default(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_short_secret_is_config_error() {
        let result = JwtCredentials::new(&JwtConfig {
            secret: "short".to_string(),
            expiration_minutes: 20,
        });

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_oversized_expiration_rejected_without_panic() {
        let result = JwtCredentials::new(&JwtConfig {
            secret: SECRET.to_string(),
            expiration_minutes: i64::MAX,
        });
        assert!(matches!(result, Err(AppError::Config(_))));

        let unchecked = JwtCredentials {
            encoding_key: EncodingKey::from_secret(SECRET.as_bytes()),
            expiration_minutes: i64::MAX,
        };
        let err = unchecked.issue_token("john@x.com", ROLE_ADMIN_ID).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_password_matches_argon2_hash() {
        let hash = Password::new("s3cret-pass").unwrap().into_string();
        let creds = credentials(20);

        assert!(creds.password_matches("s3cret-pass", &hash));
        assert!(!creds.password_matches("wrong-pass", &hash));
        assert!(!creds.password_matches("s3cret-pass", "not-a-phc-string"));
    }
}
