//! Contract tests for the price report output
//!
//! These tests pin the exact text and JSON shapes the lookup reports, so
//! scripts consuming the tool's output never have to guess.

use pricefetch_core::{PriceReport, Symbol};
use serde_json::Value;

fn success_report(price: f64) -> PriceReport {
    PriceReport::success(
        Symbol::parse("MSFT").expect("valid symbol"),
        "Microsoft Corporation",
        price,
        "USD",
    )
}

// =============================================================================
// Text output
// =============================================================================

#[test]
fn text_output_reads_company_symbol_currency_and_price() {
    assert_eq!(
        success_report(123.4).text_line(),
        "Microsoft Corporation (MSFT): USD 123.40"
    );
}

#[test]
fn text_output_always_shows_two_decimals() {
    assert_eq!(
        success_report(150.0).text_line(),
        "Microsoft Corporation (MSFT): USD 150.00"
    );
    assert_eq!(
        success_report(150.456).text_line(),
        "Microsoft Corporation (MSFT): USD 150.46"
    );
    assert_eq!(
        success_report(0.5).text_line(),
        "Microsoft Corporation (MSFT): USD 0.50"
    );
}

#[test]
fn failure_text_is_the_error_message_verbatim() {
    let message =
        "Could not fetch price for ZZZZ. Symbol may not exist or market data unavailable.";
    let report = PriceReport::failure(message);
    assert_eq!(report.text_line(), message);
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn json_output_parses_back_to_the_same_report() {
    let report = success_report(191.3);
    let json = serde_json::to_string_pretty(&report).expect("report should serialize");

    let parsed: PriceReport = serde_json::from_str(&json).expect("output should parse back");
    assert_eq!(parsed, report);
}

#[test]
fn successful_json_output_never_carries_an_error_field() {
    let report = success_report(191.3);
    let value: Value = serde_json::to_value(&report).expect("report should serialize");

    let object = value.as_object().expect("output should be an object");
    assert_eq!(object.get("success"), Some(&Value::Bool(true)));
    assert!(!object.contains_key("error"));
}

#[test]
fn failed_json_output_carries_only_the_outcome_and_message() {
    let report = PriceReport::failure("Could not fetch price for ZZZZ.");
    let value: Value = serde_json::to_value(&report).expect("report should serialize");

    let object = value.as_object().expect("output should be an object");
    assert_eq!(object.len(), 2);
    assert_eq!(object.get("success"), Some(&Value::Bool(false)));
    assert_eq!(
        object.get("error").and_then(Value::as_str),
        Some("Could not fetch price for ZZZZ.")
    );
}

#[test]
fn pretty_json_output_indents_with_two_spaces() {
    let json =
        serde_json::to_string_pretty(&success_report(191.3)).expect("report should serialize");
    assert!(
        json.starts_with("{\n  \"success\""),
        "unexpected layout: {json}"
    );
}
