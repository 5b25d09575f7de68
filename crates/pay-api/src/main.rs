//! # Payment Intent Server
//!
//! Creates Stripe payment intents for client-side checkout.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STRIPE_PUBLISHABLE_KEY=pk_test_...
//!
//! # Run the server
//! intent-server
//! ```

use pay_api::{routes, state::AppConfig, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging: JSON lines in production, human-readable otherwise
    let (json_layer, text_layer) = if config.is_production() {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer()))
    };
    tracing_subscriber::registry()
        .with(json_layer)
        .with(text_layer)
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let state = AppState::from_env(config)?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.strategy.provider_name());

    let app = routes::create_router(state);

    info!("Payment intent server starting on http://{}", addr);

    if !is_prod {
        info!("Payment intent: POST http://{}/api/create-payment-intent", addr);
        info!("Public config: GET http://{}/api/config", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
