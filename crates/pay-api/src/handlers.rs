//! # Request Handlers
//!
//! Axum request handlers for the payment intent API.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pay_core::{PaymentError, PaymentIntentResult, PaymentRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }
}

/// Public runtime config response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfigResponse {
    pub stripe_publishable_key: Option<String>,
}

/// Wrapper to implement IntoResponse for PaymentError (orphan rule workaround)
#[derive(Debug)]
pub struct ApiError(pub PaymentError);

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(PaymentError::InvalidRequest(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.status_code();
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse::new(status.as_u16(), self.0.client_message());
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "payment-intent-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Browser-facing runtime config (publishable key only)
pub async fn public_config(State(state): State<AppState>) -> Json<PublicConfigResponse> {
    Json(PublicConfigResponse {
        stripe_publishable_key: state.public.stripe_publishable_key.clone(),
    })
}

/// Create a payment intent and return its client secret
#[instrument(skip_all)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Json<PaymentIntentResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected payment intent request body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let params = request.validate().map_err(|e| {
        warn!("Rejected payment intent request: {}", e);
        ApiError(e)
    })?;

    info!(
        "Creating payment intent: amount={}, currency={}",
        params.amount, params.currency
    );

    let intent = state
        .strategy
        .create_payment_intent(&params)
        .await
        .map_err(|e| {
            error!(error = ?e, "Error creating payment intent: {}", e);
            ApiError(e)
        })?;

    info!("Created payment intent: {}", intent.id);

    Ok(Json(PaymentIntentResult::from(intent)))
}
