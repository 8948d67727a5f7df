//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{StatusCode, header::HeaderName};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::application::{
    GetProfileUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::error::AccountResult;
use crate::presentation::dto::{
    AccountSummary, LoggedInAccount, LoginRequest, LoginResponse, LogoutResponse, ProfileResponse,
    RegisterRequest, RegisterResponse, RegisteredAccount,
};
use crate::presentation::middleware::CurrentAccount;

/// Token response header, mirrored alongside the JSON body
static AUTH_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-auth-token");

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenIssuer>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/v1/register
pub async fn register<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let input = RegisterInput {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password: req.password,
        phone_number: req.phone_num,
    };

    let output = use_case.execute(input).await?;

    let body = RegisterResponse {
        message: "New user successfully signed up".to_string(),
        result: RegisteredAccount::project(&output.account, output.token.clone()),
    };

    Ok((
        StatusCode::CREATED,
        [(AUTH_TOKEN_HEADER.clone(), output.token)],
        Json(body),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/v1/login
pub async fn login<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let body = LoginResponse {
        message: "Log in successful".to_string(),
        result: LoggedInAccount::project(&output.account, output.token.clone()),
    };

    Ok((
        StatusCode::OK,
        [(AUTH_TOKEN_HEADER.clone(), output.token)],
        Json(body),
    ))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/v1/me (behind the authorization gate)
pub async fn profile<R>(
    State(state): State<AccountAppState<R>>,
    Extension(current): Extension<CurrentAccount>,
) -> AccountResult<Json<ProfileResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());

    let account = use_case.execute(&current.account_id).await?;

    Ok(Json(ProfileResponse {
        message: format!("Welcome {}", account.first_name),
        user: AccountSummary::project(&account),
    }))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /api/v1/logout
///
/// Logout is advisory: tokens are stateless and stay valid until natural
/// expiry, so the server has nothing to invalidate. The client discards its
/// copy.
pub async fn logout() -> Json<LogoutResponse> {
    tracing::debug!("Client logged out (token remains valid until expiry)");

    Json(LogoutResponse {
        message: "Successfully logged out".to_string(),
    })
}
