//! Yahoo Finance quoteSummary client.
//!
//! One endpoint, one symbol per call. The session dance lives in
//! [`crate::auth`]; this module builds the request, handles the one
//! refresh-and-retry Yahoo's auth churn requires, and parses the envelope
//! into a [`QuoteSnapshot`].

use std::sync::Arc;

use log::{debug, warn};
use serde::Deserialize;

use crate::auth::{self, SessionAuth};
use crate::domain::Symbol;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, NoopHttpClient};
use crate::provider::{ProviderError, QuoteSnapshot};

const QUOTE_SUMMARY_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const QUOTE_SUMMARY_MODULES: &str = "price,summaryDetail,financialData";
const QUOTE_TIMEOUT_MS: u64 = 10_000;

/// Client for Yahoo's quoteSummary endpoint.
pub struct YahooClient {
    http_client: Arc<dyn HttpClient>,
    auth: SessionAuth,
    cookie: HttpAuth,
}

impl YahooClient {
    /// Client wired to the supplied transport, honoring a `YAHOO_COOKIE`
    /// override from the environment.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        let cookie = auth::env_cookie().unwrap_or(HttpAuth::None);
        Self::with_cookie(http_client, cookie)
    }

    /// Client with an explicit session cookie override.
    pub fn with_cookie(http_client: Arc<dyn HttpClient>, cookie: HttpAuth) -> Self {
        Self {
            http_client,
            auth: SessionAuth::default(),
            cookie,
        }
    }

    /// Fetch the metadata snapshot for one symbol.
    pub async fn quote_summary(&self, symbol: &Symbol) -> Result<QuoteSnapshot, ProviderError> {
        let crumb = self.auth.crumb(&self.http_client, &self.cookie).await?;
        let body = self.fetch_with_auth_retry(symbol, &crumb).await?;
        let snapshot = parse_quote_summary(&body)?;
        debug!("fetched quote summary for {symbol}");
        Ok(snapshot)
    }

    /// One quote call, with a single refresh-and-retry on an auth rejection.
    async fn fetch_with_auth_retry(
        &self,
        symbol: &Symbol,
        crumb: &str,
    ) -> Result<String, ProviderError> {
        let response = self
            .http_client
            .execute(self.quote_request(symbol, crumb))
            .await
            .map_err(|e| {
                ProviderError::unavailable(format!("yahoo transport error: {}", e.message()))
            })?;

        if response.status == 401 || response.status == 429 {
            warn!(
                "yahoo returned status {} for {symbol}; refreshing session and retrying",
                response.status
            );
            self.auth.invalidate().await;
            let crumb = self.auth.crumb(&self.http_client, &self.cookie).await?;

            let retry = self
                .http_client
                .execute(self.quote_request(symbol, &crumb))
                .await
                .map_err(|e| {
                    ProviderError::unavailable(format!(
                        "yahoo transport error on retry: {}",
                        e.message()
                    ))
                })?;

            if !retry.is_success() {
                return Err(status_error(retry.status, " after auth refresh"));
            }
            return Ok(retry.body);
        }

        if !response.is_success() {
            return Err(status_error(response.status, ""));
        }

        Ok(response.body)
    }

    fn quote_request(&self, symbol: &Symbol, crumb: &str) -> HttpRequest {
        let endpoint = format!(
            "{QUOTE_SUMMARY_URL}/{}?modules={QUOTE_SUMMARY_MODULES}&crumb={}",
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(crumb)
        );

        HttpRequest::get(endpoint)
            .with_header(
                "referer",
                format!("https://finance.yahoo.com/quote/{symbol}"),
            )
            .with_auth(&self.cookie)
            .with_timeout_ms(QUOTE_TIMEOUT_MS)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new(Arc::new(NoopHttpClient))
    }
}

fn status_error(status: u16, context: &str) -> ProviderError {
    let message = format!("yahoo returned status {status}{context}");
    match status {
        400 => ProviderError::invalid_request(message),
        404 => ProviderError::not_found(message),
        429 => ProviderError::rate_limited(message),
        _ => ProviderError::unavailable(message),
    }
}

/// Map the quoteSummary envelope into a snapshot.
fn parse_quote_summary(body: &str) -> Result<QuoteSnapshot, ProviderError> {
    let envelope: QuoteSummaryEnvelope = serde_json::from_str(body)
        .map_err(|e| ProviderError::internal(format!("failed to parse yahoo response: {e}")))?;
    let summary = envelope.quote_summary;

    if let Some(error) = summary.error {
        let not_found = error.code.as_deref() == Some("Not Found");
        let description = error
            .description
            .unwrap_or_else(|| String::from("unknown yahoo error"));
        if not_found {
            return Err(ProviderError::not_found(description));
        }
        return Err(ProviderError::unavailable(format!(
            "yahoo api error: {description}"
        )));
    }

    let result = summary
        .result
        .into_iter()
        .flatten()
        .next()
        .ok_or_else(|| ProviderError::not_found("yahoo returned no quote data"))?;

    Ok(result.into_snapshot())
}

// Yahoo Finance quoteSummary response structures. Every module is optional;
// a symbol can legitimately miss any of them.

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    #[serde(default)]
    result: Option<Vec<QuoteSummaryResult>>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteSummaryResult {
    #[serde(default)]
    price: Option<PriceModule>,
    #[serde(rename = "summaryDetail", default)]
    summary_detail: Option<SummaryDetailModule>,
    #[serde(rename = "financialData", default)]
    financial_data: Option<FinancialDataModule>,
}

impl QuoteSummaryResult {
    fn into_snapshot(self) -> QuoteSnapshot {
        let price = self.price.unwrap_or_default();
        let summary_detail = self.summary_detail.unwrap_or_default();
        let financial_data = self.financial_data.unwrap_or_default();

        QuoteSnapshot {
            current_price: financial_data.current_price.and_then(RawNum::into_option),
            regular_market_price: price.regular_market_price.and_then(RawNum::into_option),
            previous_close: summary_detail.previous_close.and_then(RawNum::into_option),
            long_name: non_empty(price.long_name),
            short_name: non_empty(price.short_name),
            currency: non_empty(price.currency),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PriceModule {
    #[serde(rename = "regularMarketPrice", default)]
    regular_market_price: Option<RawNum>,
    #[serde(rename = "longName", default)]
    long_name: Option<String>,
    #[serde(rename = "shortName", default)]
    short_name: Option<String>,
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryDetailModule {
    #[serde(rename = "previousClose", default)]
    previous_close: Option<RawNum>,
}

#[derive(Debug, Default, Deserialize)]
struct FinancialDataModule {
    #[serde(rename = "currentPrice", default)]
    current_price: Option<RawNum>,
}

/// Yahoo serves numbers either bare or wrapped in `{"raw": ..., "fmt": ...}`
/// objects, depending on the endpoint's formatting mode.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum RawNum {
    Plain(f64),
    Wrapped {
        #[serde(default)]
        raw: Option<f64>,
    },
}

impl RawNum {
    /// Unwrap the number, discarding NaN and the zero placeholder Yahoo
    /// reports for missing data.
    fn into_option(self) -> Option<f64> {
        let value = match self {
            Self::Plain(value) => Some(value),
            Self::Wrapped { raw } => raw,
        };
        value.filter(|v| !v.is_nan() && *v != 0.0)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
