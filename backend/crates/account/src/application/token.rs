//! Session Token Issuer/Verifier
//!
//! Self-contained signed tokens: the claims travel with the token, nothing is
//! persisted server-side, and a token stays valid until its natural expiry.
//!
//! Wire format: `base64url(claims_json) + "." + base64url(hmac_sha256(payload))`,
//! both parts unpadded. The signature covers the encoded payload text, and is
//! checked before the payload is ever parsed - there is no "trust if unsigned"
//! path.

use std::time::Duration;

use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::{account_id::AccountId, email::Email};

type HmacSha256 = Hmac<Sha256>;

/// Claims embedded in every session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the account's UUID
    pub sub: Uuid,
    /// Email as it was at issuance time
    pub email: String,
    /// Issued-at time (Unix seconds)
    pub iat: i64,
    /// Expiry time (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Subject as a typed account ID
    pub fn account_id(&self) -> AccountId {
        AccountId::from_uuid(self.sub)
    }
}

/// Token verification failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token cannot be parsed into the expected shape
    #[error("Token is malformed")]
    Malformed,

    /// Signature does not match (tampering or wrong key)
    #[error("Token signature is invalid")]
    InvalidSignature,

    /// Signature is valid but the token is past its expiry
    #[error("Token has expired")]
    Expired,
}

/// Issues and verifies session tokens
///
/// Process-wide immutable state: constructed once at startup from
/// [`AuthConfig`] and shared read-only across requests. The secret never
/// appears in logs or Debug output.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: [u8; 32],
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token_secret, config.token_ttl)
    }

    /// Issue a signed token for the given account
    ///
    /// Two tokens issued for the same account at different times are never
    /// bit-identical: `iat`/`exp` move with the clock.
    pub fn issue(&self, account_id: &AccountId, email: &Email) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: *account_id.as_uuid(),
            email: email.as_str().to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        let payload_json =
            serde_json::to_vec(&claims).expect("claims serialize to JSON infallibly");
        let payload = platform::crypto::to_base64url(&payload_json);

        format!("{}.{}", payload, self.sign(&payload))
    }

    /// Verify a token and return its claims
    ///
    /// Checks, in order: shape, signature against the process secret, claim
    /// shape, expiry against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let (payload, signature_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;
        if payload.is_empty() || signature_b64.is_empty() || signature_b64.contains('.') {
            return Err(TokenError::Malformed);
        }

        let signature =
            platform::crypto::from_base64url(signature_b64).map_err(|_| TokenError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::InvalidSignature)?;

        let payload_json =
            platform::crypto::from_base64url(payload).map_err(|_| TokenError::Malformed)?;
        let claims: Claims =
            serde_json::from_slice(&payload_json).map_err(|_| TokenError::Malformed)?;

        if Utc::now().timestamp() > claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Sign an encoded payload
    fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        platform::crypto::to_base64url(&mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
