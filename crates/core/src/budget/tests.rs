//! Unit tests for budget validation and normalization.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal_macros::dec;
use serde_json::json;

use super::*;

fn input(name: &str, start: &str, end: &str) -> BudgetInput {
    serde_json::from_value(json!({
        "name": name,
        "period_start": start,
        "period_end": end,
    }))
    .unwrap()
}

#[test]
fn test_budget_input_accepts_plain_and_rfc3339_dates() {
    let budget: BudgetInput = serde_json::from_value(json!({
        "name": "FY25",
        "description": "Company plan",
        "period_start": "2025-01-01",
        "period_end": "2025-12-31T00:00:00Z",
        "status": "approved",
        "created_by": "alice",
    }))
    .unwrap();

    assert_eq!(budget.period_start, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(budget.period_end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    assert_eq!(budget.status.as_deref(), Some("approved"));
}

#[test]
fn test_budget_input_rejects_garbage_dates() {
    let result: Result<BudgetInput, _> = serde_json::from_value(json!({
        "name": "FY25",
        "period_start": "01/02/2025",
        "period_end": "2025-12-31",
    }));
    assert!(result.is_err());
}

#[test]
fn test_budget_input_ignores_server_assigned_fields() {
    let budget: BudgetInput = serde_json::from_value(json!({
        "id": "client-chosen",
        "created_at": "2020-01-01T00:00:00Z",
        "name": "FY25",
        "period_start": "2025-01-01",
        "period_end": "2025-12-31",
    }))
    .unwrap();
    assert_eq!(budget.name, "FY25");
}

#[test]
fn test_validate_budget_ok() {
    assert!(BudgetService::validate_budget(&input("FY25", "2025-01-01", "2025-12-31")).is_ok());
    assert!(BudgetService::validate_budget(&input("Day", "2025-03-01", "2025-03-01")).is_ok());
}

#[test]
fn test_validate_budget_blank_name() {
    assert_eq!(
        BudgetService::validate_budget(&input("  ", "2025-01-01", "2025-12-31")),
        Err(BudgetError::MissingField("name"))
    );
}

#[test]
fn test_validate_budget_inverted_period() {
    assert_eq!(
        BudgetService::validate_budget(&input("FY25", "2025-12-31", "2025-01-01")),
        Err(BudgetError::InvertedPeriod)
    );
}

#[rstest]
#[case(None, "draft")]
#[case(Some(""), "draft")]
#[case(Some("approved"), "approved")]
#[case(Some("archived"), "archived")]
#[case(Some(" Approved "), "approved")]
#[case(Some("CLOSED"), "closed")]
#[case(Some("Archived"), "Archived")]
fn test_status_or_default(#[case] raw: Option<&str>, #[case] expected: &str) {
    assert_eq!(BudgetService::status_or_default(raw), expected);
}

#[rstest]
#[case("draft", Some(BudgetStatus::Draft))]
#[case("Approved", Some(BudgetStatus::Approved))]
#[case(" closed ", Some(BudgetStatus::Closed))]
#[case("archived", None)]
fn test_status_labels(#[case] label: &str, #[case] expected: Option<BudgetStatus>) {
    assert_eq!(BudgetStatus::from_label(label), expected);
}

#[test]
fn test_line_input_defaults() {
    let line: BudgetLineInput = serde_json::from_value(json!({
        "budget_id": "b-1",
        "category": "Personnel",
        "amount": 5000.50,
    }))
    .unwrap();

    assert_eq!(line.amount, dec!(5000.50));
    assert!(line.subcategory.is_none());
    assert!(line.attributes.is_none());
    assert!(BudgetService::validate_line(&line).is_ok());
}

#[test]
fn test_line_input_requires_category() {
    let line: BudgetLineInput = serde_json::from_value(json!({
        "budget_id": "b-1",
        "category": "",
        "amount": "10",
    }))
    .unwrap();

    assert_eq!(
        BudgetService::validate_line(&line),
        Err(BudgetError::MissingField("category"))
    );
}

#[rstest]
#[case(json!({ "budget_id": "b-1", "category": "IT", "amount": "0.00001" }), "amount")]
#[case(
    json!({ "budget_id": "b-1", "category": "IT", "amount": "10", "driver_value": "1.23456" }),
    "driver_value"
)]
fn test_line_input_rejects_amounts_finer_than_storage(
    #[case] body: serde_json::Value,
    #[case] field: &'static str,
) {
    let line: BudgetLineInput = serde_json::from_value(body).unwrap();

    assert_eq!(
        BudgetService::validate_line(&line),
        Err(BudgetError::TooPrecise(field))
    );
}

#[test]
fn test_decode_attributes_best_effort() {
    let decoded = BudgetService::decode_attributes(Some(json!({"cost_center": "CC-10", "fte": 3})));
    assert_eq!(decoded.get("fte"), Some(&json!(3)));

    assert!(BudgetService::decode_attributes(Some(json!([1, 2, 3]))).is_empty());
    assert!(BudgetService::decode_attributes(Some(json!(null))).is_empty());
    assert!(BudgetService::decode_attributes(None).is_empty());
}

#[test]
fn test_budget_line_amounts_serialize_as_numbers() {
    use budgetplan_shared::{BudgetId, BudgetLineId};
    use chrono::Utc;

    let line = BudgetLine {
        id: BudgetLineId::from("l-1"),
        budget_id: BudgetId::from("b-1"),
        category: "IT".into(),
        subcategory: "Licenses".into(),
        amount: dec!(1200.5),
        driver: "seats".into(),
        driver_value: dec!(12),
        attributes: Attributes::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    let value = serde_json::to_value(&line).unwrap();
    assert_eq!(value["amount"], json!(1200.5));
    assert_eq!(value["driver_value"], json!(12.0));
}
