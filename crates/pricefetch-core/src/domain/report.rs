use serde::{Deserialize, Serialize};

use crate::domain::Symbol;

/// Currency reported when the provider omits one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Result record for one price lookup.
///
/// Exactly one shape per outcome: success carries the quote fields and no
/// `error`; failure carries only `success` and `error`. Absent fields are
/// omitted from JSON so the two shapes never mix, and field order follows
/// the declaration order below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PriceReport {
    /// Successful lookup result.
    pub fn success(
        symbol: Symbol,
        company_name: impl Into<String>,
        current_price: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            symbol: Some(symbol.into()),
            company_name: Some(company_name.into()),
            current_price: Some(current_price),
            currency: Some(currency.into()),
            error: None,
        }
    }

    /// Failed lookup carrying only a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            symbol: None,
            company_name: None,
            current_price: None,
            currency: None,
            error: Some(message.into()),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Single-line text form: the error message verbatim on failure,
    /// otherwise `"{company} ({SYMBOL}): {currency} {price}"` with the price
    /// fixed at two decimals.
    pub fn text_line(&self) -> String {
        if !self.success {
            return self.error.clone().unwrap_or_default();
        }

        let symbol = self.symbol.as_deref().unwrap_or_default();
        let company = self.company_name.as_deref().unwrap_or(symbol);
        let currency = self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
        let price = self.current_price.unwrap_or_default();

        format!("{company} ({symbol}): {currency} {price:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_success() -> PriceReport {
        PriceReport::success(
            Symbol::parse("MSFT").expect("valid symbol"),
            "Microsoft Corporation",
            123.45,
            "USD",
        )
    }

    #[test]
    fn success_serializes_quote_fields_in_order_without_error() {
        let json = serde_json::to_string(&sample_success()).expect("report should serialize");
        assert_eq!(
            json,
            r#"{"success":true,"symbol":"MSFT","company_name":"Microsoft Corporation","current_price":123.45,"currency":"USD"}"#
        );
    }

    #[test]
    fn failure_serializes_only_success_and_error() {
        let report = PriceReport::failure("something went wrong");
        let json = serde_json::to_string(&report).expect("report should serialize");
        assert_eq!(json, r#"{"success":false,"error":"something went wrong"}"#);
    }

    #[test]
    fn text_line_fixes_price_at_two_decimals() {
        let mut report = sample_success();

        report.current_price = Some(150.0);
        assert_eq!(
            report.text_line(),
            "Microsoft Corporation (MSFT): USD 150.00"
        );

        report.current_price = Some(150.456);
        assert_eq!(
            report.text_line(),
            "Microsoft Corporation (MSFT): USD 150.46"
        );
    }

    #[test]
    fn failure_text_is_the_message_verbatim() {
        let report = PriceReport::failure("Could not fetch price for ZZZZ.");
        assert_eq!(report.text_line(), "Could not fetch price for ZZZZ.");
    }

    #[test]
    fn round_trips_through_json() {
        let report = sample_success();
        let json = serde_json::to_string(&report).expect("report should serialize");
        let parsed: PriceReport = serde_json::from_str(&json).expect("report should parse back");
        assert_eq!(parsed, report);
    }
}
