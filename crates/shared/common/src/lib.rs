//! Common utilities shared by the user and auth services.
//!
//! This crate provides:
//! - Unified error handling following the use-case error taxonomy
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
