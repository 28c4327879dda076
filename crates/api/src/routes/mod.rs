//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod actuals;
pub mod budgets;
pub mod health;
pub mod reports;

/// Creates the `/api/v1` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(budgets::routes())
        .merge(actuals::routes())
        .merge(reports::routes())
}

#[cfg(test)]
pub(crate) mod test_support;
