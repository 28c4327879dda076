//! Budgets and budget line items.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::BudgetError;
pub use service::BudgetService;
pub use types::{
    Attributes, Budget, BudgetInput, BudgetLine, BudgetLineInput, BudgetStatus, period_date,
};
