//! Authentication use case.

mod auth_service;

pub use auth_service::{AuthResult, AuthService, Authenticator};
