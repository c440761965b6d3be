//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding serialization and input validation failures.
#[derive(Debug)]
pub enum DealerDeskError {
    /// An error from the underlying API client.
    Api(dealerdesk_api::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided filter input failed validation.
    InvalidInput(String),
}

impl fmt::Display for DealerDeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DealerDeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<dealerdesk_api::Error> for DealerDeskError {
    fn from(e: dealerdesk_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for DealerDeskError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
