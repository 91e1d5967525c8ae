//! HTTP application wiring (Axum router + shared state).
//!
//! Layout:
//! - `services.rs`: shared state (the ledger behind its lock)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use tally_ledger::Ledger;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The ledger is constructed by the caller and owned by the router's shared
/// state from here on; tests hand in a fresh instance per server.
pub fn build_app(ledger: Ledger) -> Router {
    let services = Arc::new(services::AppServices::new(ledger));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
