//! CSV parsing for actuals.
//!
//! Expected layout, header row first:
//!
//! ```text
//! category,subcategory,amount,date
//! Marketing,Online,1250.00,2025-03-14
//! ```

use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;

use super::error::ImportError;
use crate::money::fits_money_scale;
use super::types::{ActualRow, ParsedImport, RowError, RowErrorKind, RowOutcome};

/// Date format of the `date` column.
pub const ACTUAL_DATE_FORMAT: &str = "%Y-%m-%d";

const FIELD_COUNT: usize = 4;

/// Parses an uploaded CSV file into per-row outcomes.
///
/// The whole file is read before any row is judged, so a file the CSV reader
/// cannot tokenize fails as a batch. Rows may have differing field counts;
/// short rows are rejected individually.
///
/// # Errors
///
/// Returns `ImportError::Unreadable` if the bytes are not valid CSV/UTF-8 and
/// `ImportError::Empty` if there is no data row after the header.
pub fn parse_actuals_csv(data: &[u8]) -> Result<ParsedImport, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data);

    let records = reader
        .records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()
        .map_err(|e| ImportError::Unreadable(e.to_string()))?;

    if records.len() < 2 {
        return Err(ImportError::Empty);
    }

    let rows = records
        .iter()
        .skip(1)
        .enumerate()
        .map(|(index, record)| parse_row(index + 2, record))
        .collect();

    Ok(ParsedImport { rows })
}

fn parse_row(line: usize, record: &StringRecord) -> RowOutcome {
    if record.len() < FIELD_COUNT {
        return RowOutcome::Rejected(RowError::new(line, RowErrorKind::Incomplete));
    }

    let Some(amount) = parse_amount(&record[2]) else {
        return RowOutcome::Rejected(RowError::new(line, RowErrorKind::InvalidAmount));
    };

    let Ok(date) = NaiveDate::parse_from_str(&record[3], ACTUAL_DATE_FORMAT) else {
        return RowOutcome::Rejected(RowError::new(line, RowErrorKind::InvalidDate));
    };

    RowOutcome::Parsed(ActualRow {
        line,
        category: record[0].to_string(),
        subcategory: record[1].to_string(),
        amount,
        date,
    })
}

/// Plain decimal first, then exponent notation (`1.5e3`).
///
/// Amounts finer than the stored precision are rejected rather than rounded.
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
        .filter(|amount| fits_money_scale(*amount))
}
