//! # pay-stripe
//!
//! Stripe payment intent strategy for the payment intent service.
//!
//! `StripePaymentIntentStrategy` calls the Payment Intents API with
//! automatic payment methods enabled and returns the intent's client
//! secret for Stripe.js / Elements to confirm on the client.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_stripe::StripePaymentIntentStrategy;
//! use pay_core::{PaymentIntentStrategy, PaymentRequest};
//!
//! // Create strategy from environment (STRIPE_SECRET_KEY)
//! let strategy = StripePaymentIntentStrategy::from_env()?;
//!
//! let params = PaymentRequest::new(19.99).validate()?;
//! let intent = strategy.create_payment_intent(&params).await?;
//!
//! // Return intent.client_secret to the browser
//! ```

pub mod config;
pub mod intents;

// Re-exports
pub use config::StripeConfig;
pub use intents::StripePaymentIntentStrategy;
