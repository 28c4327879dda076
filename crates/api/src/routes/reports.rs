//! Variance report routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use budgetplan_db::ReportRepository;
use budgetplan_shared::BudgetId;
use std::sync::Arc;

use crate::{AppState, error::error_response};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets/{id}/reports/plan-actual", get(plan_actual))
        .route(
            "/budgets/{id}/reports/category-summary",
            get(category_summary),
        )
}

/// GET `/budgets/{id}/reports/plan-actual` - Planned versus actual per
/// category and subcategory.
async fn plan_actual(State(state): State<AppState>, Path(id): Path<BudgetId>) -> Response {
    let repo = ReportRepository::new(Arc::clone(&state.db));

    match repo.plan_vs_actual(&id).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e, "Build plan-actual report"),
    }
}

/// GET `/budgets/{id}/reports/category-summary` - Planned versus actual per
/// category.
async fn category_summary(State(state): State<AppState>, Path(id): Path<BudgetId>) -> Response {
    let repo = ReportRepository::new(Arc::clone(&state.db));

    match repo.category_summary(&id).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(e, "Build category summary"),
    }
}
