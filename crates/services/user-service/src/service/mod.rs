//! Service layer - user registration and lookup use cases.

mod registration_service;
mod search_service;

pub use registration_service::{Registrar, RegistrationService};
pub use search_service::{SearchService, UserFinder};
