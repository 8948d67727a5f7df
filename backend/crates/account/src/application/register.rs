//! Register Use Case
//!
//! Creates a new account and issues its first session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    email::Email,
};
use crate::error::{AccountError, AccountResult};

/// Register input
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub account: Account,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenIssuer>,
}

impl<R> RegisterUseCase<R>
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

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        // Validate email shape (also normalizes to lowercase)
        let email = Email::new(input.email)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;
        let password_hash =
            AccountPassword::from_raw(&raw_password, &self.config.hashing, self.config.pepper())
                .map_err(|e| AccountError::Internal(e.message().to_string()))?;

        let account = Account::new(
            email,
            input.first_name,
            input.last_name,
            input.phone_number,
            password_hash,
        );

        // Uniqueness is decided here, atomically, by the store's constraint.
        // Concurrent registrations with the same email race and exactly one
        // create succeeds; the loser gets DuplicateEmail.
        self.repo.create(&account).await?;

        let token = self.tokens.issue(&account.account_id, &account.email);

        tracing::info!(
            account_id = %account.account_id,
            "Account registered"
        );

        Ok(RegisterOutput { account, token })
    }
}
