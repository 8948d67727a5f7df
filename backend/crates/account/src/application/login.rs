//! Login Use Case
//!
//! Authenticates an account and issues a session token.
//!
//! The lookup is by email only; the password is verified locally against the
//! stored hash. Unknown email and wrong password remain distinct error
//! variants internally but are rendered identically at the HTTP boundary.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_password::RawPassword, email::Email};
use crate::error::{AccountError, AccountResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub account: Account,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenIssuer>,
}

impl<R> LoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, tokens: Arc<TokenIssuer>) -> Self {
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<LoginOutput> {
        // An unparseable email cannot match any account
        let email = Email::new(input.email).map_err(|_| AccountError::InvalidCredential)?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AccountError::InvalidCredential)?;

        let password_valid = account.password_hash.verify(&raw_password, self.config.pepper());

        if !password_valid {
            return Err(AccountError::InvalidCredential);
        }

        // Rehash-on-login is out of scope along with password change; surface
        // outdated cost parameters to the operator instead.
        if account.password_hash.needs_rehash(&self.config.hashing) {
            tracing::debug!(
                account_id = %account.account_id,
                "Stored password hash uses outdated cost parameters"
            );
        }

        let token = self.tokens.issue(&account.account_id, &account.email);

        tracing::info!(
            account_id = %account.account_id,
            "Account logged in"
        );

        Ok(LoginOutput { account, token })
    }
}
