//! Table definitions.
//!
//! Statements are idempotent so they can run against an already provisioned
//! database. `subcategory` is nullable there, so reads treat NULL as empty.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

/// Creates the tables and indexes if they are missing.
///
/// # Errors
///
/// Returns an error if any statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared(SCHEMA_SQL).await?;
    Ok(())
}

const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS budgets (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    period_start DATE NOT NULL,
    period_end DATE NOT NULL,
    status VARCHAR(32) NOT NULL DEFAULT 'draft',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    created_by TEXT NOT NULL DEFAULT ''
);

-- Listing is newest first
CREATE INDEX IF NOT EXISTS idx_budgets_created ON budgets(created_at DESC);

CREATE TABLE IF NOT EXISTS budget_lines (
    id TEXT PRIMARY KEY,
    budget_id TEXT NOT NULL,
    category TEXT NOT NULL,
    subcategory TEXT DEFAULT '',
    amount NUMERIC(19, 4) NOT NULL,
    driver TEXT NOT NULL DEFAULT '',
    driver_value NUMERIC(19, 4) NOT NULL DEFAULT 0,
    attributes JSONB,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS idx_budget_lines_budget ON budget_lines(budget_id, created_at);

CREATE TABLE IF NOT EXISTS actuals (
    id TEXT PRIMARY KEY,
    budget_id TEXT NOT NULL,
    category TEXT NOT NULL,
    subcategory TEXT DEFAULT '',
    amount NUMERIC(19, 4) NOT NULL,
    date DATE NOT NULL,
    source VARCHAR(32) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX IF NOT EXISTS idx_actuals_budget_date ON actuals(budget_id, date DESC);
";
