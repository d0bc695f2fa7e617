//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for accounts, statements and balance
//! - Session middleware resolving bearer tokens to identities
//! - Request extractors
//! - Error responses

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use ledgerly_core::auth::{AccountService, IdentityResolver};
use ledgerly_core::ledger::LedgerEngine;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Statement lifecycle and balance.
    pub ledger: Arc<LedgerEngine>,
    /// Bearer credential to identity.
    pub identity: IdentityResolver,
    /// Sign-up and sign-in.
    pub accounts: AccountService,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
