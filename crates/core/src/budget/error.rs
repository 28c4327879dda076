//! Budget error types.

use thiserror::Error;

/// Budget input rejected before it reaches storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// A required text field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Period ends before it starts.
    #[error("period_end must not be before period_start")]
    InvertedPeriod,

    /// A decimal field has more places than storage keeps.
    #[error("{0} must not have more than 4 decimal places")]
    TooPrecise(&'static str),
}
