use thiserror::Error;
use tickwatch_model::{error::SocketError, instruments::Symbol};

/// Failure of a ticker fetch, tagged with the operation that raised it.
#[derive(Debug, Error)]
pub enum TickerError {
    /// The HTTP collaborator failed: network, timeout or non-2xx status.
    #[error("{operation}: transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: SocketError,
    },

    /// The response body is not valid JSON or does not match the ticker shape.
    #[error("{operation}: cannot decode response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation}: no ticker returned for symbol {symbol}")]
    NotFound { operation: &'static str, symbol: Symbol },

    #[error("{operation}: invalid symbol {symbol:?}")]
    InvalidSymbol { operation: &'static str, symbol: String },
}

impl TickerError {
    pub fn operation(&self) -> &'static str {
        match self {
            TickerError::Transport { operation, .. }
            | TickerError::Decode { operation, .. }
            | TickerError::NotFound { operation, .. }
            | TickerError::InvalidSymbol { operation, .. } => operation,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TickerError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_error_display() {
        let error = TickerError::NotFound {
            operation: "ticker",
            symbol: Symbol::new("ETHBTC"),
        };
        assert_eq!(error.to_string(), "ticker: no ticker returned for symbol ETHBTC");
        assert_eq!(error.operation(), "ticker");
        assert!(error.is_not_found());

        let error = TickerError::InvalidSymbol {
            operation: "ticker",
            symbol: String::new(),
        };
        assert_eq!(error.to_string(), r#"ticker: invalid symbol """#);
        assert!(!error.is_not_found());
    }
}
