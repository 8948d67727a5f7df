//! Application Configuration
//!
//! Configuration for the Account application layer. Built once in the binary
//! from the environment and injected `Arc`-wrapped into every component;
//! nothing here mutates after startup.

use std::time::Duration;

/// Re-export the hashing cost parameters from platform
pub use platform::password::HashingParams;

/// Account application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing (32 bytes).
    /// Never logged and never echoed in any response.
    pub token_secret: [u8; 32],
    /// Token TTL (1 week)
    pub token_ttl: Duration,
    /// Password hashing cost parameters
    pub hashing: HashingParams,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            hashing: HashingParams::default(),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        let bytes = platform::crypto::random_bytes(32);
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("hashing", &self.hashing)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
