//! # Domain Models
//!
//! The two user-facing types of the price lookup flow.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Normalized stock symbol |
//! | [`PriceReport`] | Result record rendered as text or JSON |
//!
//! [`Symbol`] validates at construction; [`PriceReport`] is deliberately
//! permissive because it mirrors the output contract, not an invariant.

mod report;
mod symbol;

pub use report::{PriceReport, DEFAULT_CURRENCY};
pub use symbol::Symbol;
