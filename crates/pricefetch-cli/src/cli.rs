//! CLI argument definitions for the stock price tool.
//!
//! This module contains the command-line interface structure using Clap.
//! The binary does exactly one thing: fetch the current price for a single
//! ticker symbol.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--json` | `false` | Emit the full price record as JSON |
//!
//! # Examples
//!
//! ```bash
//! # Human-readable one-liner
//! get_stock_price AAPL
//!
//! # Full record as JSON
//! get_stock_price MSFT --json
//!
//! # Share classes and indices work too
//! get_stock_price BRK.B
//! get_stock_price ^GSPC
//! ```

use clap::Parser;

/// Fetch the current stock price for a ticker symbol.
///
/// Prints `Company (SYMBOL): CUR 123.45` by default, or the full record as
/// JSON with `--json`. Lookup failures print a readable message and exit
/// with code 1; exit code 2 means the tool itself could not start.
#[derive(Debug, Parser)]
#[command(
    name = "get_stock_price",
    author,
    version,
    about = "Fetch the current stock price for a ticker symbol",
    long_about = "Fetches the current price for a single ticker symbol from Yahoo Finance.\n\
\n\
Exit codes:\n\
  0  price fetched successfully\n\
  1  lookup failed (unknown symbol, no market data, provider error)\n\
  2  startup failure (HTTP client could not be constructed)"
)]
pub struct Cli {
    /// Ticker symbol to look up (e.g., AAPL, MSFT, BRK.B).
    pub symbol: String,

    /// Emit the full price record as JSON instead of the one-line summary.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
