//! Plan versus actual reporting.
//!
//! Sums are aggregated by the database layer; this module owns the variance
//! arithmetic and the report row shapes.

pub mod error;
pub mod types;
pub mod variance;


pub use error::ReportError;
pub use types::{CategorySummary, PlanActualComparison};
pub use variance::Variance;
