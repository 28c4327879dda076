//! Import data types.

use std::fmt;

use budgetplan_shared::{ActualId, BudgetId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::period_date;

/// Source tag stamped on every actual created from an uploaded file.
pub const CSV_SOURCE: &str = "CSV";

/// A recorded real-world expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actual {
    /// Actual ID.
    pub id: ActualId,
    /// Owning budget. Not enforced as a foreign key.
    pub budget_id: BudgetId,
    /// Category.
    pub category: String,
    /// Subcategory.
    pub subcategory: String,
    /// Spent amount.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
    /// Booking date.
    #[serde(with = "period_date")]
    pub date: NaiveDate,
    /// Origin tag, e.g. `CSV` or `Manual`.
    pub source: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A data row that passed parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActualRow {
    /// 1-based line number, counting the header as line 1.
    pub line: usize,
    /// Category.
    pub category: String,
    /// Subcategory.
    pub subcategory: String,
    /// Amount.
    pub amount: Decimal,
    /// Booking date.
    pub date: NaiveDate,
}

impl ActualRow {
    /// Stamps the row with a fresh id, the owning budget, the CSV source tag
    /// and the processing time.
    #[must_use]
    pub fn into_actual(self, budget_id: &BudgetId, now: DateTime<Utc>) -> Actual {
        Actual {
            id: ActualId::new(),
            budget_id: budget_id.clone(),
            category: self.category,
            subcategory: self.subcategory,
            amount: self.amount,
            date: self.date,
            source: CSV_SOURCE.to_string(),
            created_at: now,
        }
    }
}

/// Why a single row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowErrorKind {
    /// Fewer than four fields.
    Incomplete,
    /// Amount is not a decimal number.
    InvalidAmount,
    /// Date is not `YYYY-MM-DD`.
    InvalidDate,
    /// Row parsed but the store refused it.
    InsertFailed,
}

impl fmt::Display for RowErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Incomplete => "incomplete data",
            Self::InvalidAmount => "invalid amount",
            Self::InvalidDate => "invalid date (expected YYYY-MM-DD)",
            Self::InsertFailed => "insert failed",
        })
    }
}

/// A rejected row, rendered as `Row {line}: {reason}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number, counting the header as line 1.
    pub line: usize,
    /// Reason.
    pub kind: RowErrorKind,
}

impl RowError {
    /// Creates a row error.
    #[must_use]
    pub const fn new(line: usize, kind: RowErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.line, self.kind)
    }
}

/// Result of parsing one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Ready to insert.
    Parsed(ActualRow),
    /// Skipped.
    Rejected(RowError),
}

/// All data rows of a file, header removed, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedImport {
    /// Per-row outcomes.
    pub rows: Vec<RowOutcome>,
}

impl ParsedImport {
    /// Number of data rows.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows that passed parsing.
    #[must_use]
    pub fn parsed_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, RowOutcome::Parsed(_)))
            .count()
    }
}

/// What an import reports back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Rows persisted.
    pub imported: usize,
    /// Data rows in the file (header excluded).
    pub total: usize,
    /// One message per rejected row, in file order.
    pub errors: Vec<String>,
}

impl ImportSummary {
    /// Starts an empty summary for `total` data rows.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            imported: 0,
            total,
            errors: Vec::new(),
        }
    }

    /// Counts one persisted row.
    pub fn record_imported(&mut self) {
        self.imported += 1;
    }

    /// Appends a rejected row.
    pub fn record_error(&mut self, error: RowError) {
        self.errors.push(error.to_string());
    }
}
