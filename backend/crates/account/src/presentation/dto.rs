//! API DTOs (Data Transfer Objects)
//!
//! Response projections are explicit, statically-typed and built
//! field-by-field from the entity. Nothing serializes the internal record
//! wholesale, so the password hash cannot leak by omission.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::account::Account;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_num: String,
}

/// Registered account projection (no id, no hash)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_num: String,
    pub token: String,
}

impl RegisteredAccount {
    pub fn project(account: &Account, token: String) -> Self {
        Self {
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.as_str().to_string(),
            phone_num: account.phone_number.clone(),
            token,
        }
    }
}

/// Register response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub result: RegisteredAccount,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Logged-in account projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInAccount {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub token: String,
}

impl LoggedInAccount {
    pub fn project(account: &Account, token: String) -> Self {
        Self {
            id: *account.account_id.as_uuid(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.as_str().to_string(),
            token,
        }
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub result: LoggedInAccount,
}

// ============================================================================
// Profile
// ============================================================================

/// Profile projection for the authenticated account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl AccountSummary {
    pub fn project(account: &Account) -> Self {
        Self {
            id: *account.account_id.as_uuid(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.as_str().to_string(),
        }
    }
}

/// Profile response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub message: String,
    pub user: AccountSummary,
}

// ============================================================================
// Logout
// ============================================================================

/// Logout response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub message: String,
}
