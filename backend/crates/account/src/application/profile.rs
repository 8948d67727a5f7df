//! Get Profile Use Case
//!
//! Resolves the acting account from the identity the authorization gate
//! attached to the request.

use std::sync::Arc;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_id::AccountId;
use crate::error::{AccountError, AccountResult};

/// Get profile use case
pub struct GetProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> GetProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch the account behind a verified token's subject.
    ///
    /// A valid token whose account row no longer exists surfaces as
    /// `AccountNotFound`, which renders as the same generic 401 as any other
    /// bad credential.
    pub async fn execute(&self, account_id: &AccountId) -> AccountResult<Account> {
        self.repo
            .find_by_id(account_id)
            .await?
            .ok_or(AccountError::AccountNotFound)
    }
}
