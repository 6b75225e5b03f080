//! Price lookup orchestration.
//!
//! Turns a raw command-line symbol into a [`PriceReport`], absorbing every
//! failure into the report instead of propagating it. Callers branch on
//! [`PriceReport::is_success`] alone.

use std::fmt::Display;

use log::debug;

use crate::domain::{PriceReport, Symbol, DEFAULT_CURRENCY};
use crate::provider::ProviderErrorKind;
use crate::yahoo::YahooClient;

/// Look up the current price for `raw_symbol`.
///
/// Never fails: validation errors, transport failures, and missing market
/// data all come back as a failure report carrying a user-facing message.
/// Failure messages echo the symbol exactly as the user typed it.
pub async fn current_price(client: &YahooClient, raw_symbol: &str) -> PriceReport {
    let symbol = match Symbol::parse(raw_symbol) {
        Ok(symbol) => symbol,
        Err(error) => {
            debug!("rejected symbol {raw_symbol:?}: {error}");
            return PriceReport::failure(error_message(raw_symbol, &error));
        }
    };

    let snapshot = match client.quote_summary(&symbol).await {
        Ok(snapshot) => snapshot,
        Err(error) if error.kind() == ProviderErrorKind::NotFound => {
            debug!("no quote data for {symbol}: {error}");
            return PriceReport::failure(no_data_message(raw_symbol));
        }
        Err(error) => {
            debug!("lookup failed for {symbol}: {error}");
            return PriceReport::failure(error_message(raw_symbol, &error));
        }
    };

    let Some(price) = snapshot.best_price() else {
        debug!("quote for {symbol} carries no usable price");
        return PriceReport::failure(no_data_message(raw_symbol));
    };

    let company = snapshot
        .display_name()
        .map(str::to_owned)
        .unwrap_or_else(|| raw_symbol.to_string());
    let currency = snapshot
        .currency
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    PriceReport::success(symbol, company, price, currency)
}

fn no_data_message(symbol: &str) -> String {
    format!("Could not fetch price for {symbol}. Symbol may not exist or market data unavailable.")
}

fn error_message(symbol: &str, error: &impl Display) -> String {
    format!("Error fetching data for {symbol}: {error}")
}
