//! User Service Library
//!
//! User registration and lookup over a transactional SeaORM store.
//! The auth service embeds this crate for its user lookups.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use tracing::info;

use common::AppResult;

use crate::config::UserServiceConfig;
use crate::infra::Database;

pub use infra::{Persistence, TransactionContext, TransactionExecutor};
pub use repository::{UserRepository, UserStore};
pub use service::{Registrar, RegistrationService, SearchService, UserFinder};

/// Open the database, apply pending migrations and build the executor.
pub async fn connect(config: &UserServiceConfig) -> AppResult<Persistence> {
    let db = Database::connect(&config.database).await?;
    Ok(Persistence::new(db.get_connection()))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
