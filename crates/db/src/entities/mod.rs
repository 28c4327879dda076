//! `SeaORM` entity definitions.
//!
//! Owning budget ids on lines and actuals are logical references only; the
//! schema declares no foreign keys and deleting a budget leaves them in place.

pub mod actuals;
pub mod budget_lines;
pub mod budgets;
