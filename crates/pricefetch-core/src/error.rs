use thiserror::Error;

/// Validation errors for user-supplied input.
///
/// The symbol comes from the command line as free text, so only the cases
/// that can never form a usable request are rejected here; whether the
/// symbol actually exists is Yahoo's call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
}
