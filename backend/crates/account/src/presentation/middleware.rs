//! Authorization Gate
//!
//! Middleware for requiring a valid session token on protected routes.
//!
//! One-shot accept/reject per request, read-only: the token is verified
//! against the process-wide secret and the claims-derived identity is
//! attached to the request for downstream handlers. No account state is
//! touched and no database is consulted here.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::token::TokenIssuer;
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::AccountError;

/// Gate state: just the verifier
#[derive(Clone)]
pub struct AuthGateState {
    pub tokens: Arc<TokenIssuer>,
}

/// Identity resolved from token claims, attached to request extensions
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub account_id: AccountId,
    pub email: Email,
}

/// Middleware that requires a valid bearer token
///
/// - no credential header -> 401 Unauthorized
/// - tampered or unparseable token -> 401 with the same generic message
/// - expired token -> 401 with a distinguishable "expired" message
pub async fn require_auth(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let Some(token) = extract_bearer_token(req.headers()) else {
        return Err(AccountError::Unauthorized.into_response());
    };

    let claims = state
        .tokens
        .verify(&token)
        .map_err(|e| AccountError::from(e).into_response())?;

    let current = CurrentAccount {
        account_id: claims.account_id(),
        email: Email::from_db(claims.email),
    };

    req.extensions_mut().insert(current);

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
