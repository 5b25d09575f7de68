//! # Routes
//!
//! Axum router configuration for the payment intent API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /api/create-payment-intent - Create a payment intent, returns `{clientSecret}`
/// - GET  /api/config - Public runtime config (publishable key)
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/create-payment-intent", post(handlers::create_payment_intent))
        .route("/config", get(handlers::public_config));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
