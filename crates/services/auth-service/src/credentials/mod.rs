//! Credential verification and session token issuing.

mod jwt_credentials;

pub use jwt_credentials::{Claims, CredentialVerifier, JwtCredentials};

#[cfg(any(test, feature = "test-utils"))]
pub use jwt_credentials::MockCredentialVerifier;
