//! Budget service for input validation and normalization.

use serde_json::Value;

use super::error::BudgetError;
use crate::money::fits_money_scale;
use super::types::{Attributes, BudgetInput, BudgetLineInput, BudgetStatus};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Validates budget fields for create and update.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::MissingField` for a blank name and
    /// `BudgetError::InvertedPeriod` when the period ends before it starts.
    pub fn validate_budget(input: &BudgetInput) -> Result<(), BudgetError> {
        if input.name.trim().is_empty() {
            return Err(BudgetError::MissingField("name"));
        }

        if input.period_end < input.period_start {
            return Err(BudgetError::InvertedPeriod);
        }

        Ok(())
    }

    /// Validates budget line fields.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::MissingField` for a blank budget id or category
    /// and `BudgetError::TooPrecise` for an amount or driver value that would
    /// be rounded on storage.
    pub fn validate_line(input: &BudgetLineInput) -> Result<(), BudgetError> {
        if input.budget_id.as_str().trim().is_empty() {
            return Err(BudgetError::MissingField("budget_id"));
        }

        if input.category.trim().is_empty() {
            return Err(BudgetError::MissingField("category"));
        }

        if !fits_money_scale(input.amount) {
            return Err(BudgetError::TooPrecise("amount"));
        }

        if input.driver_value.is_some_and(|value| !fits_money_scale(value)) {
            return Err(BudgetError::TooPrecise("driver_value"));
        }

        Ok(())
    }

    /// Returns the status to store: `draft` when blank, the lowercase form of
    /// a known label, or an unknown label verbatim.
    #[must_use]
    pub fn status_or_default(raw: Option<&str>) -> String {
        match raw.map(str::trim) {
            Some(label) if !label.is_empty() => BudgetStatus::from_label(label)
                .map_or_else(|| label.to_string(), |status| status.as_str().to_string()),
            _ => BudgetStatus::Draft.as_str().to_string(),
        }
    }

    /// Best-effort decoding of stored attributes.
    ///
    /// Anything other than a JSON object decodes to an empty mapping.
    #[must_use]
    pub fn decode_attributes(raw: Option<Value>) -> Attributes {
        match raw {
            Some(Value::Object(map)) => map,
            _ => Attributes::new(),
        }
    }
}
