use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any
/// client. Everything else in the application sits behind the area gate, so
/// this module stays deliberately small: a health probe and the login
/// placeholder that denied or anonymous visitors land on.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load balancer checks.
        // Returns "ok" immediately to verify the service is running and responsive.
        .route("/health", get(|| async { "ok" }))
        // GET /login
        // Sign-in itself belongs to the external identity provider; this route exists
        // so unauthenticated visitors have somewhere to be sent.
        .route("/login", get(handlers::get_login))
}
