//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::AccountResult;

/// Account repository trait
///
/// Email uniqueness is the store's responsibility: `create` must fail with
/// `AccountError::DuplicateEmail` when another record already holds the same
/// address, atomically under concurrent registrations.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account
    async fn create(&self, account: &Account) -> AccountResult<()>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>>;
}
