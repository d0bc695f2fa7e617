//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::session::session_middleware};

pub mod auth;
pub mod health;
pub mod statements;

/// Creates the API router; statement routes require a session.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(statements::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}
