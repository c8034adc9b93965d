//! User lookup use case.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use common::AppResult;
use domain::User;

use crate::repository::UserRepository;

/// Lookup use case trait for dependency injection.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Find a user by identification number; absence is not an error.
    async fn find_by_identification(&self, identification: &str) -> AppResult<Option<User>>;
}

/// Concrete implementation of SearchService using repository.
pub struct UserFinder {
    repo: Arc<dyn UserRepository>,
}

impl UserFinder {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SearchService for UserFinder {
    async fn find_by_identification(&self, identification: &str) -> AppResult<Option<User>> {
        let found = self.repo.find_by_identity_number(identification).await?;
        if found.is_none() {
            debug!("No user registered under the given identification");
        }
        Ok(found)
    }
}
