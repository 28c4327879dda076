//! Shared types, errors, and configuration for BudgetPlan.
//!
//! This crate provides common types used across all other crates:
//! - Typed string IDs for budgets, budget lines and actuals
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, LogFormat, ServerConfig};
pub use error::AppError;
pub use types::{ActualId, BudgetId, BudgetLineId};
