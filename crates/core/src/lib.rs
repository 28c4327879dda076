//! Core business logic for BudgetPlan.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `budget` - Budgets, budget lines and their input validation
//! - `ingest` - CSV parsing for the actuals import pipeline
//! - `money` - Stored precision of amounts
//! - `reports` - Plan vs actual variance calculations

pub mod budget;
pub mod ingest;
pub mod money;
pub mod reports;
