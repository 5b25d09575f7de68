//! # Payment Intent Strategy Trait
//!
//! Strategy trait for providers that can create payment intents.
//! The HTTP layer holds one strategy behind an `Arc` and never names a
//! concrete provider, so tests can substitute a fake.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │               PaymentIntentStrategy (trait)                 │
//! │  ├── create_payment_intent()                                │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┴─────────────────┐
//!          │                                   │
//!  ┌───────┴───────────────┐         ┌─────────┴─────────┐
//!  │ StripePaymentIntent   │         │   test fakes      │
//!  │      Strategy         │         │                   │
//!  └───────────────────────┘         └───────────────────┘
//! ```

use crate::error::PaymentResult;
use crate::intent::{PaymentIntent, PaymentIntentParams};
use async_trait::async_trait;
use std::sync::Arc;

/// A provider capable of creating payment intents.
#[async_trait]
pub trait PaymentIntentStrategy: Send + Sync {
    /// Create a payment intent for the given amount and currency.
    ///
    /// # Arguments
    /// * `params` - Validated parameters, amount already in minor units
    ///
    /// # Returns
    /// The provider's `PaymentIntent`, including its client secret.
    async fn create_payment_intent(
        &self,
        params: &PaymentIntentParams,
    ) -> PaymentResult<PaymentIntent>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment intent strategy (dynamic dispatch)
pub type BoxedPaymentIntentStrategy = Arc<dyn PaymentIntentStrategy>;
