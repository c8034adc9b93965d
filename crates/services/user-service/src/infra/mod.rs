//! Infrastructure layer - database connection, migrations and transactions.

mod db;
pub mod migrations;
mod transaction;

pub use db::Database;
pub use migrations::Migrator;
pub use transaction::{Persistence, TransactionContext, TransactionExecutor};
