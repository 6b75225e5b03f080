use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_SYMBOL_LEN: usize = 32;

/// Normalized market symbol/ticker.
///
/// Normalization only trims whitespace and uppercases: tickers legitimately
/// carry dots, carets, dashes, and exchange suffixes ("BRK.B", "^GSPC",
/// "BTC-USD"), so no character set is enforced. Only empty and absurdly long
/// input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a symbol to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_symbol() {
        let parsed = Symbol::parse(" msft ").expect("symbol should parse");
        assert_eq!(parsed.as_str(), "MSFT");
    }

    #[test]
    fn keeps_share_classes_indices_and_pairs() {
        for (input, expected) in [
            ("brk.b", "BRK.B"),
            ("^gspc", "^GSPC"),
            ("btc-usd", "BTC-USD"),
        ] {
            let parsed = Symbol::parse(input).expect("symbol should parse");
            assert_eq!(parsed.as_str(), expected);
        }
    }

    #[test]
    fn rejects_empty_input() {
        let err = Symbol::parse("   ").expect_err("must fail");
        assert_eq!(err, ValidationError::EmptySymbol);
    }

    #[test]
    fn rejects_unreasonable_length() {
        let err = Symbol::parse(&"A".repeat(40)).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::SymbolTooLong { len: 40, max: 32 }
        ));
    }
}
