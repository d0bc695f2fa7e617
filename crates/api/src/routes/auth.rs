//! Account routes: sign-up and sign-in.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use ledgerly_shared::auth::{SignInRequest, SignUpRequest};
use tracing::info;

use crate::AppState;
use crate::error::ApiError;

/// Creates the account router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
}

/// POST `/sign-up` - Register a user.
async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|r| ApiError::from_json_rejection(&r))?;

    let user = state.accounts.sign_up(&payload).await?;
    info!(user_id = %user.id, "User signed up");

    Ok(StatusCode::CREATED.into_response())
}

/// POST `/sign-in` - Open a session and return its token.
async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|r| ApiError::from_json_rejection(&r))?;

    let response = state.accounts.sign_in(&payload).await?;

    Ok((StatusCode::OK, Json(response)).into_response())
}
