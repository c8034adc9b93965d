//! User repository: lookups by natural key and inserts.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, SqlErr,
};
use tracing::{debug, info, warn};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{User, DUPLICATE_USER};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implemented both over the connection pool and over an open transaction,
/// so use cases can run the same lookups inside a unit of work.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its assigned id
    async fn save(&self, user: User) -> AppResult<User>;

    /// Find user by identification number
    async fn find_by_identity_number(&self, identity_number: &str) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

async fn find_one<C>(conn: &C, condition: SimpleExpr) -> AppResult<Option<User>>
where
    C: ConnectionTrait,
{
    let result = UserEntity::find()
        .filter(condition)
        .one(conn)
        .await
        .map_err(AppError::from)?;

    if let Some(model) = &result {
        debug!("User lookup hit: {}", model.id);
    }

    Ok(result.map(User::from))
}

async fn insert_user<C>(conn: &C, candidate: User) -> AppResult<User>
where
    C: ConnectionTrait,
{
    let active_model: ActiveModel = candidate.into();
    let model = active_model.insert(conn).await.map_err(map_insert_error)?;

    info!("User saved: {}", model.id);
    Ok(User::from(model))
}

/// Unique index hits mean a concurrent registration won the race.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            warn!("Insert rejected by unique constraint on users");
            AppError::user_already_exists(DUPLICATE_USER)
        }
        _ => AppError::from(err),
    }
}

/// Concrete implementation of UserRepository backed by the connection pool
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: User) -> AppResult<User> {
        insert_user(self.db.as_ref(), user).await
    }

    async fn find_by_identity_number(&self, identity_number: &str) -> AppResult<Option<User>> {
        find_one(self.db.as_ref(), user::Column::IdentityNumber.eq(identity_number)).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        find_one(self.db.as_ref(), user::Column::Email.eq(email)).await
    }
}

/// Transaction-aware user repository.
///
/// Borrows the transaction so it cannot outlive the unit of work.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    /// Create new transaction-aware repository
    pub fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }
}

#[async_trait]
impl UserRepository for TxUserRepository<'_> {
    async fn save(&self, user: User) -> AppResult<User> {
        insert_user(self.txn, user).await
    }

    async fn find_by_identity_number(&self, identity_number: &str) -> AppResult<Option<User>> {
        find_one(self.txn, user::Column::IdentityNumber.eq(identity_number)).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        find_one(self.txn, user::Column::Email.eq(email)).await
    }
}
