//! Actuals routes: CSV import and listing.

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State, multipart::MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use budgetplan_core::ingest::ImportError;
use budgetplan_db::{ActualRepository, repositories::ActualError};
use budgetplan_shared::BudgetId;
use std::sync::Arc;

use crate::{AppState, error::error_response};

/// Multipart field that carries the CSV file.
pub const FILE_FIELD: &str = "file";

/// Largest accepted import body. Replaces axum's 2 MB default for this route.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Creates the actuals routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/budgets/{id}/import/actuals",
            post(import_actuals).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/budgets/{id}/actuals", get(list_actuals))
}

/// Reads the bytes of the `file` part, skipping any other parts.
async fn read_file_field(multipart: &mut Multipart) -> Result<Vec<u8>, ImportError> {
    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| ImportError::Unreadable(e.body_text()))?
            .ok_or(ImportError::MissingFile)?;

        if field.name() == Some(FILE_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ImportError::Unreadable(e.body_text()))?;
            return Ok(bytes.to_vec());
        }
    }
}

/// POST `/budgets/{id}/import/actuals` - Import actuals from an uploaded CSV.
async fn import_actuals(
    State(state): State<AppState>,
    Path(id): Path<BudgetId>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let Ok(mut multipart) = multipart else {
        return error_response(ActualError::Import(ImportError::MissingFile), "Import actuals");
    };

    let data = match read_file_field(&mut multipart).await {
        Ok(data) => data,
        Err(e) => return error_response(ActualError::Import(e), "Import actuals"),
    };

    let repo = ActualRepository::new(Arc::clone(&state.db));

    match repo.import_csv(&id, &data).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response(e, "Import actuals"),
    }
}

/// GET `/budgets/{id}/actuals` - List actuals, latest date first.
async fn list_actuals(State(state): State<AppState>, Path(id): Path<BudgetId>) -> Response {
    let repo = ActualRepository::new(Arc::clone(&state.db));

    match repo.list_actuals(&id).await {
        Ok(actuals) => (StatusCode::OK, Json(actuals)).into_response(),
        Err(e) => error_response(e, "List actuals"),
    }
}
