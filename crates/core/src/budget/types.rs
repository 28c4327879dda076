//! Budget data types.

use budgetplan_shared::{BudgetId, BudgetLineId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Open-ended extra attributes of a budget line.
///
/// No schema is enforced on the contents.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Lifecycle label of a budget.
///
/// Advisory only: storage accepts any string, these are the labels clients
/// are expected to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Being drafted.
    Draft,
    /// Signed off.
    Approved,
    /// Period is over.
    Closed,
}

impl BudgetStatus {
    /// Returns the stored label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Approved => "approved",
            Self::Closed => "closed",
        }
    }

    /// Recognises one of the known labels, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "approved" => Some(Self::Approved),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// A budget plan for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Budget name.
    pub name: String,
    /// Free text description.
    pub description: String,
    /// First day of the period.
    #[serde(with = "period_date")]
    pub period_start: NaiveDate,
    /// Last day of the period.
    #[serde(with = "period_date")]
    pub period_end: NaiveDate,
    /// Lifecycle label, see [`BudgetStatus`].
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Creator identifier.
    pub created_by: String,
}

/// A planned amount within a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Budget line ID.
    pub id: BudgetLineId,
    /// Owning budget. Not enforced as a foreign key.
    pub budget_id: BudgetId,
    /// Category, e.g. "Marketing".
    pub category: String,
    /// Subcategory, e.g. "Online ads".
    pub subcategory: String,
    /// Planned amount.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
    /// Driver name, e.g. "headcount".
    pub driver: String,
    /// Driver value.
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub driver_value: Decimal,
    /// Extra attributes.
    pub attributes: Attributes,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied budget fields, used for both create and full update.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetInput {
    /// Budget name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// First day of the period.
    #[serde(with = "period_date")]
    pub period_start: NaiveDate,
    /// Last day of the period.
    #[serde(with = "period_date")]
    pub period_end: NaiveDate,
    /// Lifecycle label; `draft` when omitted.
    #[serde(default)]
    pub status: Option<String>,
    /// Creator identifier. Ignored on update.
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Client-supplied budget line fields.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetLineInput {
    /// Owning budget.
    pub budget_id: BudgetId,
    /// Category.
    pub category: String,
    /// Subcategory.
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Planned amount.
    pub amount: Decimal,
    /// Driver name.
    #[serde(default)]
    pub driver: Option<String>,
    /// Driver value.
    #[serde(default)]
    pub driver_value: Option<Decimal>,
    /// Extra attributes.
    #[serde(default)]
    pub attributes: Option<Attributes>,
}

/// Serde adapter for period dates.
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (the date part is kept),
/// always writes `YYYY-MM-DD`.
pub mod period_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    /// Writes the date as `YYYY-MM-DD`.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    /// Reads a date from either accepted shape.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid date `{raw}`, expected YYYY-MM-DD or RFC 3339"
            ))
        })
    }

    /// Parses a date from either accepted shape.
    #[must_use]
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT).ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
    }
}
