//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod actual;
pub mod budget;
pub mod report;

pub use actual::{ActualError, ActualRepository};
pub use budget::{BudgetError, BudgetRepository};
pub use report::{ReportError, ReportRepository};
