//! # Pricefetch Core
//!
//! Core lookup logic and domain types for the pricefetch stock price tool.
//!
//! ## Overview
//!
//! This crate provides the components behind the `get_stock_price` binary:
//!
//! - **Domain types** for validated ticker symbols and price reports
//! - **Price lookup** that turns a raw symbol into a report without failing
//! - **Yahoo Finance client** for the quoteSummary endpoint
//! - **Session handling** for Yahoo's cookie-and-crumb handshake
//! - **HTTP client abstraction** so tests can script the transport
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | Yahoo session cookie and crumb management |
//! | [`domain`] | Domain types (Symbol, PriceReport) |
//! | [`error`] | Validation error types |
//! | [`http_client`] | HTTP client abstraction |
//! | [`lookup`] | Price lookup orchestration |
//! | [`provider`] | Provider error taxonomy and quote snapshot |
//! | [`yahoo`] | Yahoo Finance quoteSummary client |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use pricefetch_core::{lookup, ReqwestHttpClient, YahooClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestHttpClient::new()?;
//!     let client = YahooClient::new(Arc::new(transport));
//!
//!     let report = lookup::current_price(&client, "AAPL").await;
//!     println!("{}", report.text_line());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The lookup itself never returns an error; failures become failure reports
//! with a user-facing message. Below that seam, provider calls return
//! structured errors:
//!
//! ```rust
//! use pricefetch_core::{ProviderError, ProviderErrorKind};
//!
//! fn handle_error(error: ProviderError) {
//!     match error.kind() {
//!         ProviderErrorKind::NotFound => {
//!             // Symbol unknown to the provider
//!         }
//!         ProviderErrorKind::RateLimited => {
//!             // Wait and retry
//!         }
//!         _ => {}
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The Yahoo session cookie is read from the environment only (never logged)
//! - Input validation on ticker symbols before they reach a URL

pub mod auth;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod lookup;
pub mod provider;
pub mod yahoo;

// Re-export commonly used types at crate root for convenience

// Domain types
pub use domain::{PriceReport, Symbol, DEFAULT_CURRENCY};

// Error types
pub use error::ValidationError;

// HTTP client types
pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

// Provider types
pub use provider::{ProviderError, ProviderErrorKind, QuoteSnapshot};

// Yahoo client
pub use yahoo::YahooClient;
