//! Actual-expense import from CSV files.
//!
//! Parsing is split from persistence: [`parse_actuals_csv`] turns the uploaded
//! bytes into per-row outcomes, the database layer then inserts the parsed
//! rows in one transaction and fills an [`ImportSummary`].

pub mod error;
pub mod parser;
pub mod types;


pub use error::ImportError;
pub use parser::{ACTUAL_DATE_FORMAT, parse_actuals_csv};
pub use types::{
    Actual, ActualRow, CSV_SOURCE, ImportSummary, ParsedImport, RowError, RowErrorKind, RowOutcome,
};
