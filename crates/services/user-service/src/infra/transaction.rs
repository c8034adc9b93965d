//! Transaction executor for running use-case steps as one unit of work.
//!
//! Everything done through the [`TransactionContext`] either commits
//! together or not at all: the executor commits when the work returns
//! `Ok`, rolls back when it returns `Err`, and a future dropped mid-way
//! rolls back when the transaction handle is dropped.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use sea_orm::{AccessMode, DatabaseConnection, IsolationLevel, TransactionTrait};

use common::{AppError, AppResult};

use crate::repository::{TxUserRepository, UserRepository, UserStore};

/// Repository access scoped to a single open transaction.
pub struct TransactionContext<'a> {
    users: &'a (dyn UserRepository + 'a),
}

impl<'a> TransactionContext<'a> {
    pub fn new(users: &'a (dyn UserRepository + 'a)) -> Self {
        Self { users }
    }

    /// User repository bound to this transaction
    pub fn users(&self) -> &'a (dyn UserRepository + 'a) {
        self.users
    }
}

/// Runs a unit of work atomically.
///
/// Not mockable with automock because `run` is generic; tests supply
/// their own executor over a mock repository.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    async fn run<F, T>(&self, work: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> BoxFuture<'a, AppResult<T>> + Send,
        T: Send;
}

/// Database-backed executor.
pub struct Persistence {
    db: Arc<DatabaseConnection>,
    isolation: IsolationLevel,
}

impl Persistence {
    /// Executor using ReadCommitted isolation
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self::with_isolation(db, IsolationLevel::ReadCommitted)
    }

    pub fn with_isolation(db: Arc<DatabaseConnection>, isolation: IsolationLevel) -> Self {
        Self { db, isolation }
    }

    /// Non-transactional repository over the pool, for reads
    pub fn users(&self) -> Arc<dyn UserRepository> {
        Arc::new(UserStore::new(Arc::clone(&self.db)))
    }
}

#[async_trait]
impl TransactionExecutor for Persistence {
    async fn run<F, T>(&self, work: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> BoxFuture<'a, AppResult<T>> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(self.isolation), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let outcome = {
            let users = TxUserRepository::new(&txn);
            work(TransactionContext::new(&users)).await
        };

        match outcome {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use std::time::Duration;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use crate::repository::entities::UserModel;
    use domain::User;

    fn row(id: Uuid) -> UserModel {
        UserModel {
            id,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@x.com".to_string(),
            identity_number: "123456789".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            phone_number: "+573001112233".to_string(),
            address: "Street 1".to_string(),
            role_id: domain::ROLE_CLIENT_ID,
            salary: Decimal::from(700_000),
            password_hash: None,
            created_at: Utc::now(),
        }
    }

    /// Statement log of the mock, rendered for inspection.
    fn statement_log(shared: Arc<DatabaseConnection>) -> String {
        let Ok(db) = Arc::try_unwrap(shared) else {
            panic!("connection still shared");
        };
        format!("{:?}", db.into_transaction_log())
    }

    fn mock_connection(rows: Vec<Vec<UserModel>>) -> Arc<DatabaseConnection> {
        Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(rows)
                .into_connection(),
        )
    }

    #[tokio::test]
    async fn test_run_commits_on_success() {
        let db = mock_connection(Vec::new());
        let persistence = Persistence::new(Arc::clone(&db));

        let result: AppResult<u32> = persistence.run(|_ctx| Box::pin(async { Ok(7) })).await;
        assert_eq!(result.unwrap(), 7);

        drop(persistence);
        let log = statement_log(db);
        assert!(log.contains("BEGIN"));
        assert!(log.contains("COMMIT"));
        assert!(!log.contains("ROLLBACK"));
    }

    #[tokio::test]
    async fn test_run_rolls_back_on_error() {
        let db = mock_connection(vec![vec![row(Uuid::new_v4())]]);
        let persistence = Persistence::new(Arc::clone(&db));

        let mut candidate = User::from(row(Uuid::new_v4()));
        candidate.id = None;

        let result: AppResult<()> = persistence
            .run(move |ctx| {
                Box::pin(async move {
                    ctx.users().save(candidate).await?;
                    Err(AppError::invalid_user_data("rejected"))
                })
            })
            .await;
        assert!(matches!(result, Err(AppError::InvalidUserData(msg)) if msg == "rejected"));

        drop(persistence);
        let log = statement_log(db);
        assert!(log.contains("INSERT"));
        assert!(log.contains("ROLLBACK"));
        assert!(!log.contains("COMMIT"));
    }

    #[tokio::test]
    async fn test_dropped_run_never_commits() {
        let db = mock_connection(vec![vec![row(Uuid::new_v4())]]);
        let persistence = Persistence::new(Arc::clone(&db));

        let mut candidate = User::from(row(Uuid::new_v4()));
        candidate.id = None;

        let stalled = persistence.run(move |ctx| {
            Box::pin(async move {
                ctx.users().save(candidate).await?;
                futures::future::pending::<AppResult<()>>().await
            })
        });
        assert!(tokio::time::timeout(Duration::from_millis(100), stalled)
            .await
            .is_err());

        drop(persistence);
        let log = statement_log(db);
        assert!(log.contains("INSERT"));
        assert!(log.contains("ROLLBACK"));
        assert!(!log.contains("COMMIT"));
    }

    #[tokio::test]
    async fn test_context_reads_through_transaction() {
        let db = mock_connection(vec![Vec::new()]);
        let persistence =
            Persistence::with_isolation(Arc::clone(&db), IsolationLevel::Serializable);

        let found = persistence
            .run(|ctx| Box::pin(async move { ctx.users().find_by_email("john@x.com").await }))
            .await
            .unwrap();
        assert!(found.is_none());

        drop(persistence);
        let log = statement_log(db);
        assert!(log.contains("SELECT"));
        assert!(log.contains("COMMIT"));
    }
}
