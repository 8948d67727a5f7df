//! Account Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::{AuthGateState, require_auth};

/// Create the Account router with PostgreSQL repository
pub fn account_router(repo: PgAccountRepository, config: AuthConfig) -> Router {
    account_router_generic(repo, config)
}

/// Create a generic Account router for any repository implementation
pub fn account_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenIssuer::from_config(&config));

    let state = AccountAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens: tokens.clone(),
    };

    let gate = AuthGateState { tokens };

    Router::new()
        // Protected routes first; route_layer only wraps what is already here
        .route("/me", get(handlers::profile::<R>))
        .route_layer(axum::middleware::from_fn_with_state(gate, require_auth))
        // Public routes
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", get(handlers::logout))
        .with_state(state)
}
