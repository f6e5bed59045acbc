//! Identity tokens
//!
//! Signed (HS256), time-bound JWTs carrying the user id as `sub`.
//! The signing key is immutable configuration injected at construction.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Default token lifetime (12 hours)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 12 * 3600;

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 3600;

/// Default `iss` claim
pub const DEFAULT_ISSUER: &str = "finance-tracker";

/// Token configuration
#[derive(Clone)]
pub struct TokenConfig {
    /// HMAC secret
    pub secret: Vec<u8>,
    /// Lifetime of issued tokens
    pub ttl: Duration,
    /// Issuer written to and required in `iss`
    pub issuer: String,
}

impl TokenConfig {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token encoding failed: {0}")]
    Encoding(String),

    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    InvalidToken,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::InvalidToken,
        }
    }
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
    pub iss: String,
    /// Unique token id
    pub jti: String,
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Expiry (Unix seconds)
    pub expires_at: i64,
}

/// Issues and validates identity tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    issuer: String,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            validation,
            ttl: config.ttl,
            issuer: config.issuer,
        }
    }

    /// Sign a token for `subject`
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| TokenError::Encoding("token lifetime out of range".to_string()))?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: exp.timestamp(),
        })
    }

    /// Verify signature, issuer and expiry; return the claims
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::InvalidToken);
        }
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenConfig::new(b"test-secret-key-for-unit-tests!!".to_vec()))
    }

    #[test]
    fn test_config_builder() {
        let config = TokenConfig::new(b"k".to_vec())
            .ttl(Duration::minutes(30))
            .issuer("tests");
        assert_eq!(config.ttl, Duration::minutes(30));
        assert_eq!(config.issuer, "tests");
        assert!(!format!("{:?}", config).contains("107"));
    }

    #[test]
    fn test_issue_and_validate() {
        let service = service();
        let subject = Uuid::new_v4().to_string();

        let issued = service.issue(&subject).unwrap();
        assert!(issued.expires_at > Utc::now().timestamp());

        let claims = service.validate(&issued.token).unwrap();
        assert_eq!(claims.sub, subject);
        assert_eq!(claims.iss, DEFAULT_ISSUER);
        assert_eq!(claims.exp, issued.expires_at);
    }

    #[test]
    fn test_each_token_has_unique_jti() {
        let service = service();
        let a = service.validate(&service.issue("u").unwrap().token).unwrap();
        let b = service.validate(&service.issue("u").unwrap().token).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let other = TokenService::new(TokenConfig::new(b"another-secret".to_vec()));
        let token = service().issue("user").unwrap().token;

        assert!(matches!(other.validate(&token), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let secret = b"shared-secret".to_vec();
        let issuer_a = TokenService::new(TokenConfig::new(secret.clone()).issuer("a"));
        let issuer_b = TokenService::new(TokenConfig::new(secret).issuer("b"));

        let token = issuer_a.issue("user").unwrap().token;
        assert!(issuer_b.validate(&token).is_err());
    }

    #[test]
    fn test_malformed_and_empty_tokens() {
        let service = service();
        assert!(matches!(service.validate("not.a.jwt"), Err(TokenError::InvalidToken)));
        assert!(matches!(service.validate(""), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_expired_token() {
        let expired = TokenService::new(
            TokenConfig::new(b"test-secret".to_vec()).ttl(Duration::seconds(-60)),
        );
        let token = expired.issue("user").unwrap().token;

        let result = expired.validate(&token);
        assert!(matches!(result, Err(TokenError::Expired)), "got {:?}", result);
    }

    #[test]
    fn test_out_of_range_ttl_is_an_error() {
        let service = TokenService::new(
            TokenConfig::new(b"test-secret".to_vec()).ttl(Duration::seconds(9_000_000_000_000)),
        );

        let result = service.issue("user");
        assert!(matches!(result, Err(TokenError::Encoding(_))), "got {:?}", result);
    }

    #[test]
    fn test_max_ttl_issues() {
        let service = TokenService::new(
            TokenConfig::new(b"test-secret".to_vec()).ttl(Duration::seconds(MAX_TOKEN_TTL_SECS)),
        );

        let issued = service.issue("user").unwrap();
        assert!(issued.expires_at > Utc::now().timestamp() + MAX_TOKEN_TTL_SECS - 60);
    }
}
