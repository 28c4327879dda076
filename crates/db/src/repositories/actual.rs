//! Actual repository for CSV import and listing of recorded expenses.

use budgetplan_core::ingest::{
    parse_actuals_csv, Actual, ActualRow, ImportError, ImportSummary, RowError, RowErrorKind,
    RowOutcome,
};
use budgetplan_shared::{ActualId, AppError, BudgetId};
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{info, warn};
use std::sync::Arc;

use crate::entities::actuals;

/// Error types for actual operations.
#[derive(Debug, thiserror::Error)]
pub enum ActualError {
    /// The uploaded file was rejected as a whole.
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ActualError> for AppError {
    fn from(err: ActualError) -> Self {
        match err {
            ActualError::Import(e) => {
                let details: String = match &e {
                    ImportError::MissingFile => "expected a multipart field named \"file\"".into(),
                    ImportError::Unreadable(reason) => reason.clone(),
                    ImportError::Empty => "the header row must be followed by data rows".into(),
                };
                Self::MalformedInput {
                    message: e.to_string(),
                    details,
                }
            }
            ActualError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

impl From<actuals::Model> for Actual {
    fn from(model: actuals::Model) -> Self {
        Self {
            id: ActualId::from(model.id),
            budget_id: BudgetId::from(model.budget_id),
            category: model.category,
            subcategory: model.subcategory.unwrap_or_default(),
            amount: model.amount,
            date: model.date,
            source: model.source,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<Actual> for actuals::ActiveModel {
    fn from(actual: Actual) -> Self {
        Self {
            id: Set(actual.id.into_inner()),
            budget_id: Set(actual.budget_id.into_inner()),
            category: Set(actual.category),
            subcategory: Set(Some(actual.subcategory)),
            amount: Set(actual.amount),
            date: Set(actual.date),
            source: Set(actual.source),
            created_at: Set(actual.created_at.into()),
        }
    }
}

/// Actual repository.
#[derive(Debug, Clone)]
pub struct ActualRepository {
    db: Arc<DatabaseConnection>,
}

impl ActualRepository {
    /// Creates a new actual repository.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Imports an uploaded CSV file of actuals into a budget.
    ///
    /// All inserts share one transaction. Each row is written inside its own
    /// savepoint, so a row the store refuses is rolled back alone and reported
    /// as `Row n: insert failed` while the others still commit.
    ///
    /// The budget id is not checked against existing budgets.
    ///
    /// # Errors
    ///
    /// Returns `ActualError::Import` if the file cannot be read or holds no
    /// data rows, and `ActualError::Database` if the transaction cannot be
    /// opened or committed.
    pub async fn import_csv(
        &self,
        budget_id: &BudgetId,
        data: &[u8],
    ) -> Result<ImportSummary, ActualError> {
        let parsed = parse_actuals_csv(data)?;
        let mut summary = ImportSummary::new(parsed.total());
        let now = Utc::now();

        let txn = self.db.begin().await?;

        for outcome in parsed.rows {
            match outcome {
                RowOutcome::Rejected(err) => summary.record_error(err),
                RowOutcome::Parsed(row) => {
                    let line = row.line;
                    match insert_row(&txn, budget_id, row, now).await {
                        Ok(()) => summary.record_imported(),
                        Err(e) => {
                            warn!(error = %e, line, budget_id = %budget_id, "Failed to insert actual");
                            summary.record_error(RowError::new(line, RowErrorKind::InsertFailed));
                        }
                    }
                }
            }
        }

        txn.commit().await?;

        info!(
            budget_id = %budget_id,
            imported = summary.imported,
            total = summary.total,
            rejected = summary.errors.len(),
            "Actuals imported"
        );

        Ok(summary)
    }

    /// Lists the actuals of a budget, latest booking date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_actuals(&self, budget_id: &BudgetId) -> Result<Vec<Actual>, ActualError> {
        let actuals = actuals::Entity::find()
            .filter(actuals::Column::BudgetId.eq(budget_id.as_str()))
            .order_by_desc(actuals::Column::Date)
            .order_by_desc(actuals::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(actuals.into_iter().map(Actual::from).collect())
    }
}

async fn insert_row(
    txn: &DatabaseTransaction,
    budget_id: &BudgetId,
    row: ActualRow,
    now: DateTime<Utc>,
) -> Result<(), DbErr> {
    let savepoint = txn.begin().await?;
    let model = actuals::ActiveModel::from(row.into_actual(budget_id, now));

    match actuals::Entity::insert(model)
        .exec_without_returning(&savepoint)
        .await
    {
        Ok(_) => savepoint.commit().await,
        Err(e) => {
            savepoint.rollback().await?;
            Err(e)
        }
    }
}

#[cfg(test)]
#[path = "actual_tests.rs"]
mod tests;
