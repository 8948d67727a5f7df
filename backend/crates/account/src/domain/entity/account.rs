//! Account Entity
//!
//! The single aggregate of this service: one registered user account.
//! The password hash lives on the entity but never leaves the process;
//! response projections are built field-by-field in the presentation layer.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    account_id::AccountId, account_password::AccountPassword, email::Email,
};

/// Account entity
///
/// `email` is unique across the service (enforced by the storage layer) and
/// immutable after creation, as is `account_id`. The password hash is only
/// replaced through an explicit password-change operation, which is not part
/// of the current scope.
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier, assigned at creation
    pub account_id: AccountId,
    /// Unique email address (stored lowercase)
    pub email: Email,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact phone number (kept as text; leading zeros matter)
    pub phone_number: String,
    /// Argon2id hash of the current password
    pub password_hash: AccountPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    pub fn new(
        email: Email,
        first_name: String,
        last_name: String,
        phone_number: String,
        password_hash: AccountPassword,
    ) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            email,
            first_name,
            last_name,
            phone_number,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::account_password::RawPassword;
    use platform::password::HashingParams;

    fn test_account() -> Account {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        let params = HashingParams {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        };
        let hash = AccountPassword::from_raw(&raw, &params, None).unwrap();
        Account::new(
            Email::new("frank@example.com").unwrap(),
            "Frank".to_string(),
            "Osagie".to_string(),
            "08000000000".to_string(),
            hash,
        )
    }

    #[test]
    fn test_new_account_gets_fresh_id() {
        let a = test_account();
        let b = test_account();
        assert_ne!(a.account_id, b.account_id);
    }

    #[test]
    fn test_debug_does_not_leak_hash() {
        let account = test_account();
        let debug = format!("{:?}", account);
        assert!(!debug.contains("$argon2"));
    }
}
