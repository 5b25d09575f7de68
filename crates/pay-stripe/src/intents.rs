//! # Stripe Payment Intents
//!
//! Implementation of the Stripe Payment Intents API (`POST /v1/payment_intents`).
//! The returned client secret is handed to Stripe.js / Elements on the client.

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::DateTime;
use pay_core::{PaymentError, PaymentIntent, PaymentIntentParams, PaymentIntentStrategy, PaymentResult};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Request timeout, matching the Stripe SDK default
const REQUEST_TIMEOUT: Duration = Duration::from_secs(80);

const PROVIDER: &str = "stripe";

/// Stripe Payment Intents strategy
///
/// Holds one pooled HTTP client; safe to share across requests.
pub struct StripePaymentIntentStrategy {
    config: StripeConfig,
    client: Client,
}

impl StripePaymentIntentStrategy {
    /// Create a new Stripe payment intent strategy
    pub fn new(config: StripeConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    /// Configuration this strategy was built with
    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Form fields for the create call
    fn form_params(params: &PaymentIntentParams) -> Vec<(&'static str, String)> {
        vec![
            ("amount", params.amount.to_string()),
            ("currency", params.currency.clone()),
            (
                "automatic_payment_methods[enabled]",
                params.automatic_payment_methods.to_string(),
            ),
        ]
    }
}

#[async_trait]
impl PaymentIntentStrategy for StripePaymentIntentStrategy {
    #[instrument(skip(self, params), fields(amount = params.amount, currency = %params.currency))]
    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> PaymentResult<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);

        debug!("Creating Stripe payment intent");

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&Self::form_params(params))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);
            return Err(api_error(status, &body));
        }

        let intent: StripePaymentIntentResponse = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Upstream {
                provider: PROVIDER.to_string(),
                status_code: None,
                message: Some(format!("Failed to parse Stripe response: {}", e)),
                code: None,
            }
        })?;

        info!("Created Stripe payment intent: id={}", intent.id);

        Ok(intent.into())
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

/// Map a reqwest failure (connect, timeout, body read) to an upstream error
fn transport_error(e: reqwest::Error) -> PaymentError {
    PaymentError::Upstream {
        provider: PROVIDER.to_string(),
        status_code: e.status().map(|s| s.as_u16()),
        message: Some(e.to_string()),
        code: None,
    }
}

/// Map a non-2xx Stripe response to an upstream error.
///
/// The HTTP status is always kept; message and code come from the
/// `{"error": {...}}` envelope when the body has one.
fn api_error(status: StatusCode, body: &str) -> PaymentError {
    let envelope = serde_json::from_str::<StripeErrorResponse>(body)
        .ok()
        .map(|r| r.error);

    let (message, code) = match envelope {
        Some(err) => {
            debug!(
                "Stripe error detail: type={:?}, param={:?}",
                err.error_type, err.param
            );
            (err.message, err.code.or(err.decline_code))
        }
        None => (None, None),
    };

    PaymentError::Upstream {
        provider: PROVIDER.to_string(),
        status_code: Some(status.as_u16()),
        message,
        code,
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripePaymentIntentResponse {
    id: String,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    amount: i64,
    #[serde(default)]
    currency: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    created: Option<i64>,
}

impl From<StripePaymentIntentResponse> for PaymentIntent {
    fn from(r: StripePaymentIntentResponse) -> Self {
        PaymentIntent {
            id: r.id,
            client_secret: r.client_secret,
            amount: r.amount,
            currency: r.currency,
            status: r.status,
            created: r.created.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    decline_code: Option<String>,
    #[serde(default)]
    param: Option<String>,
}
