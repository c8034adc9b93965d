//! User registration use case.
//!
//! Validation, both uniqueness checks and the insert all run inside one
//! transaction, so a rejected registration never leaves partial state.
//! New sign-ups get their identification number as the initial password.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::{Password, User, DUPLICATE_EMAIL, DUPLICATE_IDENTITY_NUMBER};

use crate::infra::{TransactionContext, TransactionExecutor};

/// Registration use case trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a candidate user, returning the persisted record.
    async fn register_user(&self, candidate: User) -> AppResult<User>;

    /// Hash the identification number into the initial password, then register.
    async fn register_with_initial_password(&self, mut candidate: User) -> AppResult<User> {
        let initial = Password::new(&candidate.identity_number)?;
        candidate.password_hash = Some(initial.into_string());
        self.register_user(candidate).await
    }
}

/// Registration over a transaction executor.
pub struct Registrar<X: TransactionExecutor> {
    executor: Arc<X>,
}

impl<X: TransactionExecutor> Registrar<X> {
    pub fn new(executor: Arc<X>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<X: TransactionExecutor> RegistrationService for Registrar<X> {
    async fn register_user(&self, candidate: User) -> AppResult<User> {
        self.executor
            .run(move |ctx| Box::pin(register_within(ctx, candidate)))
            .await
    }
}

async fn register_within(ctx: TransactionContext<'_>, candidate: User) -> AppResult<User> {
    candidate.validate_salary()?;

    let users = ctx.users();

    if users
        .find_by_identity_number(&candidate.identity_number)
        .await?
        .is_some()
    {
        warn!("Registration rejected: identification number already registered");
        return Err(AppError::user_already_exists(DUPLICATE_IDENTITY_NUMBER));
    }

    if users.find_by_email(&candidate.email).await?.is_some() {
        warn!("Registration rejected: email already registered");
        return Err(AppError::user_already_exists(DUPLICATE_EMAIL));
    }

    let saved = users.save(candidate).await?;
    info!("User registered: {}", saved.email);

    Ok(saved)
}
