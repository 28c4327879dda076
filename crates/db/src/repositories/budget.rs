//! Budget repository for budget and budget line database operations.

use budgetplan_core::budget::{
    Budget, BudgetError as BudgetInputError, BudgetInput, BudgetLine, BudgetLineInput,
    BudgetService,
};
use budgetplan_shared::{AppError, BudgetId, BudgetLineId};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use serde_json::Value;
use std::sync::Arc;

use crate::entities::{budget_lines, budgets};

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// Budget not found.
    #[error("Budget not found: {0}")]
    NotFound(BudgetId),

    /// Input rejected by validation.
    #[error(transparent)]
    Invalid(#[from] BudgetInputError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::NotFound(_) => Self::NotFound("Budget not found".to_string()),
            BudgetError::Invalid(e) => Self::Validation(e.to_string()),
            BudgetError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

impl From<budgets::Model> for Budget {
    fn from(model: budgets::Model) -> Self {
        Self {
            id: BudgetId::from(model.id),
            name: model.name,
            description: model.description,
            period_start: model.period_start,
            period_end: model.period_end,
            status: model.status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            created_by: model.created_by,
        }
    }
}

impl From<budget_lines::Model> for BudgetLine {
    fn from(model: budget_lines::Model) -> Self {
        Self {
            id: BudgetLineId::from(model.id),
            budget_id: BudgetId::from(model.budget_id),
            category: model.category,
            subcategory: model.subcategory.unwrap_or_default(),
            amount: model.amount,
            driver: model.driver,
            driver_value: model.driver_value,
            attributes: BudgetService::decode_attributes(model.attributes),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

/// Budget repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: Arc<DatabaseConnection>,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // ========================================================================
    // Budget CRUD Operations
    // ========================================================================

    /// Creates a new budget with a server-assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the insert fails.
    pub async fn create_budget(&self, input: BudgetInput) -> Result<Budget, BudgetError> {
        BudgetService::validate_budget(&input)?;

        let now = Utc::now().into();
        let status = BudgetService::status_or_default(input.status.as_deref());

        let budget = budgets::ActiveModel {
            id: Set(BudgetId::new().into_inner()),
            name: Set(input.name),
            description: Set(input.description.unwrap_or_default()),
            period_start: Set(input.period_start),
            period_end: Set(input.period_end),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
            created_by: Set(input.created_by.unwrap_or_default()),
        };

        let result = budget.insert(self.db.as_ref()).await?;
        Ok(result.into())
    }

    /// Lists all budgets, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_budgets(&self) -> Result<Vec<Budget>, BudgetError> {
        let budgets = budgets::Entity::find()
            .order_by_desc(budgets::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(budgets.into_iter().map(Budget::from).collect())
    }

    /// Gets a budget by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the budget is not found or database query fails.
    pub async fn get_budget(&self, budget_id: &BudgetId) -> Result<Budget, BudgetError> {
        budgets::Entity::find_by_id(budget_id.as_str().to_owned())
            .one(self.db.as_ref())
            .await?
            .map(Budget::from)
            .ok_or_else(|| BudgetError::NotFound(budget_id.clone()))
    }

    /// Replaces every client-editable field of a budget.
    ///
    /// `created_at` and `created_by` keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, no row matched, or database
    /// operation fails.
    pub async fn update_budget(
        &self,
        budget_id: &BudgetId,
        input: BudgetInput,
    ) -> Result<Budget, BudgetError> {
        BudgetService::validate_budget(&input)?;

        let status = BudgetService::status_or_default(input.status.as_deref());

        let changes = budgets::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description.unwrap_or_default()),
            period_start: Set(input.period_start),
            period_end: Set(input.period_end),
            status: Set(status),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
            created_by: NotSet,
        };

        let result = budgets::Entity::update_many()
            .set(changes)
            .filter(budgets::Column::Id.eq(budget_id.as_str()))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(BudgetError::NotFound(budget_id.clone()));
        }

        self.get_budget(budget_id).await
    }

    /// Deletes a budget. Its lines and actuals are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if no row matched or database operation fails.
    pub async fn delete_budget(&self, budget_id: &BudgetId) -> Result<(), BudgetError> {
        let result = budgets::Entity::delete_by_id(budget_id.as_str().to_owned())
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(BudgetError::NotFound(budget_id.clone()));
        }

        Ok(())
    }

    // ========================================================================
    // Budget Line Operations
    // ========================================================================

    /// Creates one budget line.
    ///
    /// Absent attributes are stored as an empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the insert fails.
    pub async fn create_budget_line(
        &self,
        input: BudgetLineInput,
    ) -> Result<BudgetLine, BudgetError> {
        BudgetService::validate_line(&input)?;

        let now = Utc::now().into();
        let attributes = input.attributes.unwrap_or_default();

        let line = budget_lines::ActiveModel {
            id: Set(BudgetLineId::new().into_inner()),
            budget_id: Set(input.budget_id.into_inner()),
            category: Set(input.category),
            subcategory: Set(Some(input.subcategory.unwrap_or_default())),
            amount: Set(input.amount),
            driver: Set(input.driver.unwrap_or_default()),
            driver_value: Set(input.driver_value.unwrap_or(Decimal::ZERO)),
            attributes: Set(Some(Value::Object(attributes))),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = line.insert(self.db.as_ref()).await?;
        Ok(result.into())
    }

    /// Lists the lines of a budget, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_budget_lines(
        &self,
        budget_id: &BudgetId,
    ) -> Result<Vec<BudgetLine>, BudgetError> {
        let lines = budget_lines::Entity::find()
            .filter(budget_lines::Column::BudgetId.eq(budget_id.as_str()))
            .order_by_asc(budget_lines::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(lines.into_iter().map(BudgetLine::from).collect())
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;
