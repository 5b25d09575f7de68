//! # Stripe Configuration
//!
//! Configuration management for Stripe integration.
//! All secrets are loaded from environment variables.

use pay_core::PaymentError;
use std::env;

/// Default Stripe API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";

/// Stripe API version pinned for every request
pub const DEFAULT_API_VERSION: &str = "2025-11-17.clover";

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_..., sk_live_... or restricted rk_...)
    pub secret_key: String,

    /// Publishable key (pk_test_... or pk_live_...), exposed to clients
    pub publishable_key: Option<String>,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STRIPE_SECRET_KEY`
    ///
    /// Optional env vars:
    /// - `NUXT_PUBLIC_STRIPE_PUBLISHABLE_KEY`, falling back to `STRIPE_PUBLISHABLE_KEY`
    /// - `STRIPE_API_BASE_URL`
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let secret_key = env::var("STRIPE_SECRET_KEY").map_err(|_| {
            PaymentError::Configuration("STRIPE_SECRET_KEY not set".to_string())
        })?;

        let publishable_key = non_empty_var("NUXT_PUBLIC_STRIPE_PUBLISHABLE_KEY")
            .or_else(|| non_empty_var("STRIPE_PUBLISHABLE_KEY"));

        let mut config = Self::new(secret_key);
        config.publishable_key = publishable_key;
        if let Some(url) = non_empty_var("STRIPE_API_BASE_URL") {
            config = config.with_api_base_url(url);
        }

        config.validate()?;
        Ok(config)
    }

    /// Create config with an explicit secret key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            publishable_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Check key formats
    pub fn validate(&self) -> Result<(), PaymentError> {
        if !self.secret_key.starts_with("sk_") && !self.secret_key.starts_with("rk_") {
            return Err(PaymentError::Configuration(
                "STRIPE_SECRET_KEY must start with sk_ or rk_".to_string(),
            ));
        }

        if let Some(ref pk) = self.publishable_key {
            if !pk.starts_with("pk_") {
                return Err(PaymentError::Configuration(
                    "Stripe publishable key must start with pk_".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.contains("_test_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set publishable key
    pub fn with_publishable_key(mut self, key: impl Into<String>) -> Self {
        self.publishable_key = Some(key.into());
        self
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_config_validation() {
        let config = StripeConfig::new("sk_test_abc123").with_publishable_key("pk_test_xyz789");
        assert!(config.validate().is_ok());
        assert!(config.is_test_mode());

        let config = StripeConfig::new("rk_live_abc123");
        assert!(config.validate().is_ok());
        assert!(!config.is_test_mode());

        assert!(StripeConfig::new("pk_test_wrong").validate().is_err());
        assert!(StripeConfig::new("sk_test_abc")
            .with_publishable_key("sk_test_wrong")
            .validate()
            .is_err());
    }

    #[test]
    fn test_defaults() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.api_base_url, "https://api.stripe.com");
        assert_eq!(config.api_version, "2025-11-17.clover");
        assert!(config.publishable_key.is_none());
    }

    #[test]
    fn test_auth_header() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.auth_header(), "Bearer sk_test_abc123");
    }

    const ENV_VARS: [&str; 4] = [
        "STRIPE_SECRET_KEY",
        "NUXT_PUBLIC_STRIPE_PUBLISHABLE_KEY",
        "STRIPE_PUBLISHABLE_KEY",
        "STRIPE_API_BASE_URL",
    ];

    fn clear_env() {
        for name in ENV_VARS {
            env::remove_var(name);
        }
    }

    // One test owns the process environment so the cases cannot race.
    #[test]
    fn test_from_env() {
        clear_env();

        // Missing secret key
        let err = StripeConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("STRIPE_SECRET_KEY not set"));

        // Malformed secret key
        env::set_var("STRIPE_SECRET_KEY", "pk_test_wrong");
        assert!(StripeConfig::from_env().is_err());

        // Plain publishable key is picked up
        env::set_var("STRIPE_SECRET_KEY", "sk_test_env");
        env::set_var("STRIPE_PUBLISHABLE_KEY", "pk_test_plain");
        let config = StripeConfig::from_env().unwrap();
        assert_eq!(config.secret_key, "sk_test_env");
        assert_eq!(config.publishable_key.as_deref(), Some("pk_test_plain"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        // NUXT_PUBLIC_ key takes precedence
        env::set_var("NUXT_PUBLIC_STRIPE_PUBLISHABLE_KEY", "pk_test_public");
        let config = StripeConfig::from_env().unwrap();
        assert_eq!(config.publishable_key.as_deref(), Some("pk_test_public"));

        // Blank values count as unset
        env::set_var("NUXT_PUBLIC_STRIPE_PUBLISHABLE_KEY", "  ");
        let config = StripeConfig::from_env().unwrap();
        assert_eq!(config.publishable_key.as_deref(), Some("pk_test_plain"));

        env::set_var("STRIPE_PUBLISHABLE_KEY", "");
        env::set_var("STRIPE_API_BASE_URL", "");
        let config = StripeConfig::from_env().unwrap();
        assert!(config.publishable_key.is_none());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        // Base URL override reaches the strategy
        env::set_var("STRIPE_API_BASE_URL", "http://127.0.0.1:12111/");
        let strategy = crate::StripePaymentIntentStrategy::from_env().unwrap();
        assert_eq!(strategy.config().api_base_url, "http://127.0.0.1:12111");
        assert!(strategy.config().is_test_mode());

        clear_env();
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = StripeConfig::new("sk_test_abc").with_api_base_url("http://127.0.0.1:9999/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
    }
}
