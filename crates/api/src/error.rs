//! Error to HTTP response mapping.
//!
//! Every error body has the shape `{"error": "..."}`. Client errors that
//! carry parser detail add a `"details"` field. Server-side failures are
//! logged with their cause and answered with a generic message.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use budgetplan_shared::AppError;
use serde_json::json;
use tracing::{debug, error};

/// Message for request bodies that are not valid JSON for the endpoint.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body";

/// Builds the response for a failed request.
///
/// `action` names what was attempted and is only written to the log.
pub fn error_response(err: impl Into<AppError>, action: &str) -> Response {
    let err = err.into();

    if err.is_server_error() {
        error!(error = %err, code = err.error_code(), action, "Request failed");
    } else {
        debug!(error = %err, code = err.error_code(), action, "Request rejected");
    }

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let body = match err.details() {
        Some(details) => json!({ "error": err.public_message(), "details": details }),
        None => json!({ "error": err.public_message() }),
    };

    (status, Json(body)).into_response()
}

/// Builds the 400 response for a body axum could not deserialize.
pub fn json_rejection_response(rejection: &JsonRejection) -> Response {
    error_response(
        AppError::MalformedInput {
            message: INVALID_JSON_MESSAGE.to_string(),
            details: rejection.body_text(),
        },
        "Decode request body",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[case(AppError::NotFound("Budget not found".into()), StatusCode::NOT_FOUND)]
    #[case(AppError::Validation("name is required".into()), StatusCode::BAD_REQUEST)]
    #[case(AppError::Database("boom".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    #[tokio::test]
    async fn test_status_codes(#[case] err: AppError, #[case] expected: StatusCode) {
        assert_eq!(error_response(err, "test").status(), expected);
    }

    #[tokio::test]
    async fn test_server_errors_hide_their_cause() {
        let response = error_response(AppError::Database("password leaked".into()), "test");

        let body = body_json(response).await;

        assert_eq!(body, json!({ "error": "An internal error occurred" }));
    }

    #[tokio::test]
    async fn test_malformed_input_carries_details() {
        let response = error_response(
            AppError::MalformedInput {
                message: "Could not read CSV file".into(),
                details: "unterminated quote".into(),
            },
            "test",
        );

        let body = body_json(response).await;

        assert_eq!(
            body,
            json!({ "error": "Could not read CSV file", "details": "unterminated quote" })
        );
    }
}
