//! # Payment Error Types
//!
//! Typed error handling for the payment intent service.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Message returned when the provider failure carries no message of its own
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to create payment intent";

/// Message returned for a missing or non-positive amount
pub const INVALID_AMOUNT_MESSAGE: &str = "Invalid amount. Minimum amount is 1.";

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (schema or amount validation)
    #[error("{0}")]
    InvalidRequest(String),

    /// Any failure raised by the payment provider call.
    ///
    /// `status_code` and `message` are whatever the provider reported;
    /// either may be absent (transport errors carry no status code).
    #[error("Provider error [{provider}]: {}", .message.as_deref().unwrap_or(UPSTREAM_FALLBACK_MESSAGE))]
    Upstream {
        provider: String,
        status_code: Option<u16>,
        message: Option<String>,
        /// Provider-specific error code (e.g. `card_declined`), for logs only
        code: Option<String>,
    },
}

impl PaymentError {
    /// Amount validation failure with the fixed client-facing message
    pub fn invalid_amount() -> Self {
        PaymentError::InvalidRequest(INVALID_AMOUNT_MESSAGE.to_string())
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::Upstream { status_code, .. } => match status_code {
                Some(code) if (100..=599).contains(code) => *code,
                _ => 500,
            },
        }
    }

    /// Returns the message that is safe to hand back to the HTTP client
    pub fn client_message(&self) -> String {
        match self {
            PaymentError::Configuration(_) => UPSTREAM_FALLBACK_MESSAGE.to_string(),
            PaymentError::InvalidRequest(msg) => msg.clone(),
            PaymentError::Upstream { message, .. } => message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string()),
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
