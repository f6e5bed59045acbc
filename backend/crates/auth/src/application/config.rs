//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

use platform::crypto::random_secret;
use platform::token::{TokenConfig, TokenService};

/// Auth application configuration
///
/// Built once at startup and shared read-only between handlers and the
/// auth filter.
#[derive(Clone)]
pub struct AuthConfig {
    tokens: TokenService,
    /// Password pepper (optional, application-wide secret)
    password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(token: TokenConfig) -> Self {
        Self {
            tokens: TokenService::new(token),
            password_pepper: None,
        }
    }

    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        let pepper = pepper.into();
        self.password_pepper = (!pepper.is_empty()).then_some(pepper);
        self
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::new(TokenConfig::new(random_secret()))
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("tokens", &"[TokenService]")
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
