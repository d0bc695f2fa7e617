//! Statement and balance routes.
//!
//! Every route here sits behind the session middleware.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use ledgerly_core::ledger::StatementCandidate;
use ledgerly_shared::types::{Amount, StatementId};
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;
use crate::middleware::session::AuthUser;

/// Balance response.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Income minus outflow, rounded to cents.
    pub balance: Amount,
}

/// Creates the statement router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/statement", get(list_statements).post(create_statement))
        .route(
            "/statement/{id}",
            get(get_statement)
                .put(update_statement)
                .delete(delete_statement),
        )
        .route("/balance", get(balance))
}

fn parse_id(raw: &str) -> Result<StatementId, ApiError> {
    StatementId::from_str(raw).map_err(|_| ApiError::invalid("\"id\" must be a valid identifier"))
}

fn candidate(
    payload: Result<Json<StatementCandidate>, JsonRejection>,
) -> Result<StatementCandidate, ApiError> {
    payload
        .map(|Json(c)| c)
        .map_err(|r| ApiError::from_json_rejection(&r))
}

/// POST `/statement` - Record a statement for the caller.
async fn create_statement(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    payload: Result<Json<StatementCandidate>, JsonRejection>,
) -> Result<Response, ApiError> {
    let candidate = candidate(payload)?;
    state.ledger.create(&identity, &candidate).await?;
    Ok(StatusCode::CREATED.into_response())
}

/// GET `/statement` - List the caller's statements, newest first.
async fn list_statements(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Response, ApiError> {
    let statements = state.ledger.list(&identity).await?;
    Ok((StatusCode::OK, Json(statements)).into_response())
}

/// GET `/statement/{id}` - Fetch one of the caller's statements.
async fn get_statement(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let statement = state.ledger.get(&identity, id).await?;
    Ok((StatusCode::OK, Json(statement)).into_response())
}

/// PUT `/statement/{id}` - Replace description and value.
async fn update_statement(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<StatementCandidate>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let candidate = candidate(payload)?;
    let statement = state.ledger.update(&identity, id, &candidate).await?;
    Ok((StatusCode::OK, Json(statement)).into_response())
}

/// DELETE `/statement/{id}` - Remove one of the caller's statements.
async fn delete_statement(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    state.ledger.delete(&identity, id).await?;
    Ok(StatusCode::OK.into_response())
}

/// GET `/balance` - Income minus outflow over all the caller's statements.
async fn balance(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Response, ApiError> {
    let balance = state.ledger.balance(&identity).await?;
    Ok((StatusCode::OK, Json(BalanceResponse { balance })).into_response())
}
