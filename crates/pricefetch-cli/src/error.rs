use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
///
/// Lookup failures never surface here; they become failure reports with
/// exit code 1. These errors cover the tool failing before or after the
/// lookup itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("market data client unavailable: {0}")]
    Startup(#[from] pricefetch_core::HttpError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Startup(_) => 2,
            Self::Serialization(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pricefetch_core::HttpError;

    #[test]
    fn startup_failure_maps_to_exit_code_2() {
        let error = CliError::from(HttpError::non_retryable("failed to build http client"));
        assert_eq!(error.exit_code(), 2);
        assert!(error.to_string().starts_with("market data client unavailable:"));
    }
}
