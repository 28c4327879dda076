//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use super::variance::Variance;

/// Plan versus actual for one (category, subcategory) group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanActualComparison {
    /// Category.
    pub category: String,
    /// Subcategory.
    pub subcategory: String,
    /// Sum of planned budget lines.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub planned: Decimal,
    /// Sum of actuals.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub actual: Decimal,
    /// Actual minus planned.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub variance: Decimal,
    /// Variance in percent of planned; zero when planned is zero.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub variance_pct: Decimal,
}

impl PlanActualComparison {
    /// Builds a report row from aggregated sums.
    ///
    /// A missing subcategory is reported as an empty string.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MissingColumn` when the group has no category.
    pub fn from_totals(
        category: Option<String>,
        subcategory: Option<String>,
        planned: Decimal,
        actual: Decimal,
    ) -> Result<Self, ReportError> {
        let category = category.ok_or(ReportError::MissingColumn("category"))?;
        let variance = Variance::between(planned, actual);

        Ok(Self {
            category,
            subcategory: subcategory.unwrap_or_default(),
            planned,
            actual,
            variance: variance.amount,
            variance_pct: variance.percent,
        })
    }
}

/// Plan versus actual collapsed to category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category.
    pub category: String,
    /// Sum of planned budget lines.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub planned: Decimal,
    /// Sum of actuals.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub actual: Decimal,
    /// Actual minus planned.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub variance: Decimal,
}

impl CategorySummary {
    /// Builds a summary row from aggregated sums.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MissingColumn` when the group has no category.
    pub fn from_totals(
        category: Option<String>,
        planned: Decimal,
        actual: Decimal,
    ) -> Result<Self, ReportError> {
        let category = category.ok_or(ReportError::MissingColumn("category"))?;

        Ok(Self {
            category,
            planned,
            actual,
            variance: Variance::between(planned, actual).amount,
        })
    }
}
