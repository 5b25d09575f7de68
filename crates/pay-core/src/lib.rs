//! # pay-core
//!
//! Core types and traits for the payment intent service.
//!
//! This crate provides:
//! - `PaymentRequest` and its validation into `PaymentIntentParams`
//! - `PaymentIntent` / `PaymentIntentResult` for provider results
//! - `PaymentIntentStrategy` trait for implementing payment providers
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{PaymentRequest, PaymentIntentStrategy};
//!
//! let params = PaymentRequest::new(19.99).validate()?;
//! assert_eq!(params.amount, 1999);
//!
//! let intent = strategy.create_payment_intent(&params).await?;
//! // Hand intent.client_secret to the client-side SDK
//! ```

pub mod error;
pub mod intent;
pub mod strategy;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult, INVALID_AMOUNT_MESSAGE, UPSTREAM_FALLBACK_MESSAGE};
pub use intent::{
    to_minor_units, PaymentIntent, PaymentIntentParams, PaymentIntentResult, PaymentRequest,
    DEFAULT_CURRENCY, MINIMUM_AMOUNT,
};
pub use strategy::{BoxedPaymentIntentStrategy, PaymentIntentStrategy};
