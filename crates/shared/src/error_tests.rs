use rstest::rstest;

use super::*;

#[rstest]
#[case(AppError::NotFound("test".into()), 404, "NOT_FOUND")]
#[case(AppError::Validation("test".into()), 400, "VALIDATION_ERROR")]
#[case(
    AppError::MalformedInput { message: "test".into(), details: "eof".into() },
    400,
    "MALFORMED_INPUT"
)]
#[case(AppError::Database("test".into()), 500, "DATABASE_ERROR")]
fn test_app_error_status_and_code(
    #[case] err: AppError,
    #[case] status: u16,
    #[case] code: &str,
) {
    assert_eq!(err.status_code(), status);
    assert_eq!(err.error_code(), code);
    assert_eq!(err.is_server_error(), status >= 500);
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        format!("{}", AppError::NotFound("msg".into())),
        "Not found: msg"
    );
    assert_eq!(
        format!("{}", AppError::Validation("msg".into())),
        "Validation error: msg"
    );
    assert_eq!(
        format!(
            "{}",
            AppError::MalformedInput {
                message: "msg".into(),
                details: "why".into()
            }
        ),
        "Malformed input: msg (why)"
    );
    assert_eq!(
        format!("{}", AppError::Database("msg".into())),
        "Database error: msg"
    );
}

#[test]
fn test_public_message_hides_server_causes() {
    let err = AppError::Database("connection refused on 10.0.0.4".into());
    assert_eq!(err.public_message(), GENERIC_INTERNAL_MESSAGE);

    let err = AppError::NotFound("Budget not found".into());
    assert_eq!(err.public_message(), "Budget not found");
}

#[test]
fn test_details_only_for_malformed_input() {
    let err = AppError::MalformedInput {
        message: "Could not read CSV file".into(),
        details: "line 3: unterminated quote".into(),
    };
    assert_eq!(err.details(), Some("line 3: unterminated quote"));
    assert_eq!(AppError::Validation("x".into()).details(), None);
}
