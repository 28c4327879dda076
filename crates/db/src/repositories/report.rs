//! Report repository for plan-versus-actual queries.
//!
//! Both reports join pre-aggregated planned totals against pre-aggregated
//! actual totals, so groups that exist on only one side still appear.

use budgetplan_core::reports::{CategorySummary, PlanActualComparison};
use budgetplan_shared::{AppError, BudgetId};
use rust_decimal::Decimal;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, DbErr, FromQueryResult, QueryResult, Statement,
};
use tracing::warn;
use std::sync::Arc;

/// Error types for report queries.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Raw plan-versus-actual row.
#[derive(Debug, FromQueryResult)]
struct PlanActualRow {
    category: Option<String>,
    subcategory: Option<String>,
    planned: Decimal,
    actual: Decimal,
}

/// Raw category summary row.
#[derive(Debug, FromQueryResult)]
struct CategoryRow {
    category: Option<String>,
    planned: Decimal,
    actual: Decimal,
}

const PLAN_ACTUAL_SQL: &str = r"
WITH planned AS (
    SELECT category, COALESCE(subcategory, '') AS subcategory, SUM(amount) AS total
    FROM budget_lines
    WHERE budget_id = $1
    GROUP BY category, COALESCE(subcategory, '')
),
spent AS (
    SELECT category, COALESCE(subcategory, '') AS subcategory, SUM(amount) AS total
    FROM actuals
    WHERE budget_id = $1
    GROUP BY category, COALESCE(subcategory, '')
)
SELECT
    COALESCE(p.category, s.category) AS category,
    COALESCE(p.subcategory, s.subcategory) AS subcategory,
    COALESCE(p.total, 0) AS planned,
    COALESCE(s.total, 0) AS actual
FROM planned p
FULL OUTER JOIN spent s
    ON p.category = s.category AND p.subcategory = s.subcategory
ORDER BY category, subcategory
";

const CATEGORY_SUMMARY_SQL: &str = r"
WITH planned AS (
    SELECT category, SUM(amount) AS total
    FROM budget_lines
    WHERE budget_id = $1
    GROUP BY category
),
spent AS (
    SELECT category, SUM(amount) AS total
    FROM actuals
    WHERE budget_id = $1
    GROUP BY category
)
SELECT
    COALESCE(p.category, s.category) AS category,
    COALESCE(p.total, 0) AS planned,
    COALESCE(s.total, 0) AS actual
FROM planned p
FULL OUTER JOIN spent s ON p.category = s.category
ORDER BY category
";

/// Report repository for variance reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: Arc<DatabaseConnection>,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Planned versus actual totals per category and subcategory.
    ///
    /// Rows that cannot be decoded are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn plan_vs_actual(
        &self,
        budget_id: &BudgetId,
    ) -> Result<Vec<PlanActualComparison>, ReportError> {
        let rows = self.query(PLAN_ACTUAL_SQL, budget_id).await?;

        Ok(rows
            .iter()
            .filter_map(|row| {
                let raw = PlanActualRow::from_query_result(row, "")
                    .inspect_err(|e| warn!(error = %e, "Skipping unreadable plan-actual row"))
                    .ok()?;
                PlanActualComparison::from_totals(
                    raw.category,
                    raw.subcategory,
                    raw.planned,
                    raw.actual,
                )
                .inspect_err(|e| warn!(error = %e, "Skipping malformed plan-actual row"))
                .ok()
            })
            .collect())
    }

    /// Planned versus actual totals per category.
    ///
    /// Rows that cannot be decoded are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn category_summary(
        &self,
        budget_id: &BudgetId,
    ) -> Result<Vec<CategorySummary>, ReportError> {
        let rows = self.query(CATEGORY_SUMMARY_SQL, budget_id).await?;

        Ok(rows
            .iter()
            .filter_map(|row| {
                let raw = CategoryRow::from_query_result(row, "")
                    .inspect_err(|e| warn!(error = %e, "Skipping unreadable category row"))
                    .ok()?;
                CategorySummary::from_totals(raw.category, raw.planned, raw.actual)
                    .inspect_err(|e| warn!(error = %e, "Skipping malformed category row"))
                    .ok()
            })
            .collect())
    }

    async fn query(&self, sql: &str, budget_id: &BudgetId) -> Result<Vec<QueryResult>, DbErr> {
        self.db
            .query_all(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                [budget_id.as_str().into()],
            ))
            .await
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
