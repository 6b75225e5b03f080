//! Provider contract types shared by the Yahoo client and the lookup layer.

use std::fmt::{Display, Formatter};

/// Provider-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// The symbol does not exist or the provider has no data for it.
    NotFound,
    Unavailable,
    RateLimited,
    InvalidRequest,
    Internal,
}

/// Structured provider error carried up to the lookup layer.
///
/// `NotFound` is the one kind the lookup treats specially: it reads as
/// missing market data rather than a fetch failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
    retryable: bool,
}

impl ProviderError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::NotFound,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Unavailable,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::RateLimited,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Internal,
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ProviderErrorKind::NotFound => "provider.not_found",
            ProviderErrorKind::Unavailable => "provider.unavailable",
            ProviderErrorKind::RateLimited => "provider.rate_limited",
            ProviderErrorKind::InvalidRequest => "provider.invalid_request",
            ProviderErrorKind::Internal => "provider.internal",
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ProviderError {}

/// Normalized metadata snapshot for one symbol.
///
/// Numeric fields are `None` when the provider omits them or reports a
/// zero/NaN placeholder; string fields are `None` when absent or empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteSnapshot {
    pub current_price: Option<f64>,
    pub regular_market_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub currency: Option<String>,
}

impl QuoteSnapshot {
    /// First populated price in preference order: live trade price, regular
    /// session price, previous close.
    pub fn best_price(&self) -> Option<f64> {
        self.current_price
            .or(self.regular_market_price)
            .or(self.previous_close)
    }

    /// Display name preference: long name, then short name.
    pub fn display_name(&self) -> Option<&str> {
        self.long_name.as_deref().or(self.short_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_price_prefers_live_trade_price() {
        let snapshot = QuoteSnapshot {
            current_price: Some(191.3),
            regular_market_price: Some(190.5),
            previous_close: Some(188.2),
            ..QuoteSnapshot::default()
        };

        assert_eq!(snapshot.best_price(), Some(191.3));
    }

    #[test]
    fn best_price_walks_the_fallback_chain() {
        let snapshot = QuoteSnapshot {
            previous_close: Some(188.2),
            ..QuoteSnapshot::default()
        };

        assert_eq!(snapshot.best_price(), Some(188.2));
        assert_eq!(QuoteSnapshot::default().best_price(), None);
    }

    #[test]
    fn display_name_prefers_long_name() {
        let snapshot = QuoteSnapshot {
            long_name: Some(String::from("Apple Inc.")),
            short_name: Some(String::from("Apple")),
            ..QuoteSnapshot::default()
        };

        assert_eq!(snapshot.display_name(), Some("Apple Inc."));
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(ProviderError::not_found("x").code(), "provider.not_found");
        assert_eq!(
            ProviderError::rate_limited("x").code(),
            "provider.rate_limited"
        );
        assert!(ProviderError::unavailable("x").retryable());
        assert!(!ProviderError::internal("x").retryable());
    }
}
