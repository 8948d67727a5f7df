//! Value Object Module

pub mod account_id;
pub mod account_password;
pub mod email;

pub use account_id::AccountId;
pub use account_password::{AccountPassword, RawPassword};
pub use email::Email;
