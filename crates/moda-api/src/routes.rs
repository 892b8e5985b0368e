//! API route definitions.
//!
//! Maps HTTP paths to handler functions.

use axum::routing::get;
use axum::Router;

use crate::handlers::{handle_contract_profiles, handle_health, handle_name};
use crate::server::AppState;

/// Builds the axum router with all API routes.
///
/// Routes:
/// - `GET /health` — health check
/// - `GET /profiles/{address}/name` — profile display name
/// - `GET /contract-profiles/{address}` — profile contracts changed by an account
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/profiles/{address}/name", get(handle_name))
        .route("/contract-profiles/{address}", get(handle_contract_profiles))
        .with_state(state)
}
