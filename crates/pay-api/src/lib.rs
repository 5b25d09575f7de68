//! # pay-api
//!
//! HTTP API layer for the payment intent service.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The payment intent endpoint and its error mapping
//! - Public runtime config for client-side payment UI
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/create-payment-intent` | Create payment intent, returns client secret |
//! | GET | `/api/config` | Stripe publishable key |

pub mod handlers;
pub mod routes;
pub mod state;

pub use handlers::{ApiError, ErrorResponse};
pub use routes::create_router;
pub use state::{AppConfig, AppState, PublicConfig};
