//! Session middleware for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use ledgerly_core::auth::{AuthError, UserIdentity};

use crate::AppState;
use crate::error::ApiError;

/// Session middleware that resolves the bearer token to a user.
///
/// This middleware:
/// 1. Reads the Authorization header
/// 2. Resolves the token through the session store to a user
/// 3. Stores the identity in request extensions for handlers to access
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match state.identity.resolve_header(header).await {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Extractor for the authenticated caller.
///
/// ```ignore
/// async fn handler(AuthUser(identity): AuthUser) -> impl IntoResponse {
///     // identity.email owns every statement created here
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserIdentity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserIdentity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| ApiError::from(AuthError::MissingCredential))
    }
}
