//! Budget and budget line routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use budgetplan_core::budget::{BudgetInput, BudgetLineInput};
use budgetplan_db::BudgetRepository;
use budgetplan_shared::BudgetId;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::{
    AppState,
    error::{error_response, json_rejection_response},
};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", post(create_budget).get(list_budgets))
        .route(
            "/budgets/{id}",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
        .route("/budget-lines", post(create_budget_line))
        .route("/budgets/{id}/lines", get(list_budget_lines))
}

fn repository(state: &AppState) -> BudgetRepository {
    BudgetRepository::new(Arc::clone(&state.db))
}

// ============================================================================
// Budget Handlers
// ============================================================================

/// POST `/budgets` - Create a budget.
async fn create_budget(
    State(state): State<AppState>,
    payload: Result<Json<BudgetInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection_response(&rejection),
    };

    match repository(&state).create_budget(input).await {
        Ok(budget) => {
            info!(budget_id = %budget.id, name = %budget.name, "Budget created");
            (StatusCode::CREATED, Json(budget)).into_response()
        }
        Err(e) => error_response(e, "Create budget"),
    }
}

/// GET `/budgets` - List budgets, newest first.
async fn list_budgets(State(state): State<AppState>) -> Response {
    match repository(&state).list_budgets().await {
        Ok(budgets) => (StatusCode::OK, Json(budgets)).into_response(),
        Err(e) => error_response(e, "List budgets"),
    }
}

/// GET `/budgets/{id}` - Fetch one budget.
async fn get_budget(State(state): State<AppState>, Path(id): Path<BudgetId>) -> Response {
    match repository(&state).get_budget(&id).await {
        Ok(budget) => (StatusCode::OK, Json(budget)).into_response(),
        Err(e) => error_response(e, "Get budget"),
    }
}

/// PUT `/budgets/{id}` - Replace the editable fields of a budget.
async fn update_budget(
    State(state): State<AppState>,
    Path(id): Path<BudgetId>,
    payload: Result<Json<BudgetInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection_response(&rejection),
    };

    match repository(&state).update_budget(&id, input).await {
        Ok(budget) => {
            info!(budget_id = %id, "Budget updated");
            (StatusCode::OK, Json(budget)).into_response()
        }
        Err(e) => error_response(e, "Update budget"),
    }
}

/// DELETE `/budgets/{id}` - Delete a budget.
async fn delete_budget(State(state): State<AppState>, Path(id): Path<BudgetId>) -> Response {
    match repository(&state).delete_budget(&id).await {
        Ok(()) => {
            info!(budget_id = %id, "Budget deleted");
            (
                StatusCode::OK,
                Json(json!({ "message": "Budget deleted successfully" })),
            )
                .into_response()
        }
        Err(e) => error_response(e, "Delete budget"),
    }
}

// ============================================================================
// Budget Line Handlers
// ============================================================================

/// POST `/budget-lines` - Create one budget line.
async fn create_budget_line(
    State(state): State<AppState>,
    payload: Result<Json<BudgetLineInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return json_rejection_response(&rejection),
    };

    match repository(&state).create_budget_line(input).await {
        Ok(line) => {
            info!(line_id = %line.id, budget_id = %line.budget_id, "Budget line created");
            (StatusCode::CREATED, Json(line)).into_response()
        }
        Err(e) => error_response(e, "Create budget line"),
    }
}

/// GET `/budgets/{id}/lines` - List the lines of a budget, oldest first.
async fn list_budget_lines(State(state): State<AppState>, Path(id): Path<BudgetId>) -> Response {
    match repository(&state).list_budget_lines(&id).await {
        Ok(lines) => (StatusCode::OK, Json(lines)).into_response(),
        Err(e) => error_response(e, "List budget lines"),
    }
}
