//! # Payment Intent Types
//!
//! Request, parameter, and result types for creating a payment intent.
//! Amounts arrive in major units (dollars) and leave in minor units (cents).

use crate::error::{PaymentError, PaymentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Currency used when the request does not name one
pub const DEFAULT_CURRENCY: &str = "usd";

/// Minor units per major unit
const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// Smallest accepted amount, in major units
pub const MINIMUM_AMOUNT: f64 = 1.0;

/// Convert a major-unit amount to minor units (`round(amount * 100)`)
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * MINOR_UNITS_PER_MAJOR).round() as i64
}

/// Inbound payment request body.
///
/// Both fields are optional at the schema level so that a missing amount
/// produces the amount validation error instead of a generic body error.
/// `null` deserializes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentRequest {
    /// Amount in major currency units (e.g. dollars)
    #[serde(default)]
    pub amount: Option<f64>,

    /// ISO currency code, passed through without validation
    #[serde(default)]
    pub currency: Option<String>,
}

impl PaymentRequest {
    /// Create a request with an amount and the default currency
    pub fn new(amount: f64) -> Self {
        Self {
            amount: Some(amount),
            currency: None,
        }
    }

    /// Builder: set currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Validate the request and build the outbound provider parameters.
    ///
    /// Rejects a missing or non-finite amount, any amount below
    /// `MINIMUM_AMOUNT`, and any amount that rounds to less than one minor unit.
    pub fn validate(&self) -> PaymentResult<PaymentIntentParams> {
        let amount = match self.amount {
            Some(a) if a.is_finite() && a >= MINIMUM_AMOUNT => a,
            _ => return Err(PaymentError::invalid_amount()),
        };

        let minor = to_minor_units(amount);
        if minor < 1 {
            return Err(PaymentError::invalid_amount());
        }

        let currency = self
            .currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Ok(PaymentIntentParams::new(minor, currency))
    }
}

/// Validated parameters for the provider's "create payment intent" call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentIntentParams {
    /// Amount in minor currency units (cents)
    pub amount: i64,

    /// Currency code, unchanged from the request
    pub currency: String,

    /// Let the provider choose the payment methods to offer
    pub automatic_payment_methods: bool,
}

impl PaymentIntentParams {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            automatic_payment_methods: true,
        }
    }
}

/// A payment intent as returned by the provider.
///
/// Only the fields this service reads are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider-assigned ID (pi_...)
    pub id: String,

    /// Secret handed to the client-side SDK, returned verbatim
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Amount in minor units
    #[serde(default)]
    pub amount: i64,

    #[serde(default)]
    pub currency: String,

    /// Provider status (e.g. "requires_payment_method")
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Response body for a created payment intent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResult {
    pub client_secret: Option<String>,
}

impl From<PaymentIntent> for PaymentIntentResult {
    fn from(intent: PaymentIntent) -> Self {
        Self {
            client_secret: intent.client_secret,
        }
    }
}
