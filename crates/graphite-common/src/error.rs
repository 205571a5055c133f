//! Error types for the Graphite wrapper
//!
//! Provider failures are carried through unchanged; nothing here retries.

use thiserror::Error;

/// Result type alias using GraphiteError
pub type Result<T> = std::result::Result<T, GraphiteError>;

/// Unified error type for client operations
#[derive(Debug, Error)]
pub enum GraphiteError {
    // Handle used before its provider was attached
    #[error("Client not initialized: {0}")]
    NotInitialized(String),

    // Anything the trust data provider reported
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Amount must be non-negative")]
    InvalidAmount,

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Explorer API errors
    #[error("Explorer error: {0}")]
    Explorer(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Failures reported by the trust data provider
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Network failure: {0}")]
    Network(String),

    #[error("Contract reverted: {0}")]
    Reverted(String),

    #[error("Insufficient funds: fee {fee} exceeds balance {balance}")]
    InsufficientFunds { fee: String, balance: String },

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("{0}")]
    Other(String),
}

impl GraphiteError {
    /// Whether this error came from the provider
    pub fn is_provider(&self) -> bool {
        matches!(self, GraphiteError::Provider(_))
    }
}

impl From<serde_json::Error> for GraphiteError {
    fn from(err: serde_json::Error) -> Self {
        GraphiteError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphiteError::NotInitialized("no provider attached".to_string());
        assert!(err.to_string().contains("no provider attached"));
    }

    #[test]
    fn test_provider_error_passthrough() {
        let inner = ProviderError::Reverted("activation already pending".to_string());
        let err: GraphiteError = inner.clone().into();
        assert!(err.is_provider());
        match err {
            GraphiteError::Provider(e) => assert_eq!(e, inner),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_json_error_converts() {
        let err: GraphiteError = serde_json::from_str::<u64>("not json").unwrap_err().into();
        assert!(matches!(err, GraphiteError::Serialization(_)));
    }

    #[test]
    fn test_insufficient_funds_display() {
        let err = ProviderError::InsufficientFunds {
            fee: "0.5".to_string(),
            balance: "0.1".to_string(),
        };
        assert!(err.to_string().contains("0.5"));
        assert!(err.to_string().contains("0.1"));
    }
}
