//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payment intent strategy and runtime configuration.

use pay_core::BoxedPaymentIntentStrategy;
use pay_stripe::StripePaymentIntentStrategy;
use std::net::SocketAddr;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            environment: "development".to_string(),
        }
    }
}

/// Values safe to expose to the browser
#[derive(Debug, Clone, Default)]
pub struct PublicConfig {
    /// Stripe publishable key (pk_...)
    pub stripe_publishable_key: Option<String>,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment intent provider
    pub strategy: BoxedPaymentIntentStrategy,
    /// Browser-facing runtime config
    pub public: PublicConfig,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by Stripe, configured from the environment
    pub fn from_env(config: AppConfig) -> anyhow::Result<Self> {
        let strategy = StripePaymentIntentStrategy::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        let stripe_config = strategy.config();
        let public = PublicConfig {
            stripe_publishable_key: stripe_config.publishable_key.clone(),
        };

        tracing::info!(
            "Stripe mode: {}",
            if stripe_config.is_test_mode() { "test" } else { "live" }
        );
        if public.stripe_publishable_key.is_none() {
            tracing::warn!("No Stripe publishable key configured, /api/config will return null");
        }

        Ok(Self::new(Arc::new(strategy), config).with_public(public))
    }

    /// Create state around an explicit strategy
    pub fn new(strategy: BoxedPaymentIntentStrategy, config: AppConfig) -> Self {
        Self {
            strategy,
            public: PublicConfig::default(),
            config,
        }
    }

    /// Builder: set public runtime config
    pub fn with_public(mut self, public: PublicConfig) -> Self {
        self.public = public;
        self
    }
}
