//! Server configuration from environment variables.
//!
//! Load with `ApiConfig::from_env()` after calling `dotenvy::dotenv()`.

use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use platform::crypto::{SECRET_LEN, from_base64};
use platform::token::{DEFAULT_ISSUER, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, TokenConfig};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:8081,http://127.0.0.1:8081";

/// Server configuration
#[derive(Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// Allowed CORS origins
    pub frontend_origins: Vec<String>,
    /// Decoded `JWT_SECRET`; `None` only when unset
    pub jwt_secret: Option<Vec<u8>>,
    pub jwt_ttl_secs: i64,
    pub jwt_issuer: String,
    pub password_pepper: Option<Vec<u8>>,
}

impl ApiConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {v}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let jwt_secret = match var("JWT_SECRET") {
            Some(v) => {
                let secret = from_base64(&v).context("JWT_SECRET must be base64")?;
                if secret.len() < SECRET_LEN {
                    bail!("JWT_SECRET must decode to at least {SECRET_LEN} bytes");
                }
                Some(secret)
            }
            None => None,
        };

        let jwt_ttl_secs = match var("JWT_TTL_SECS") {
            Some(v) => {
                let ttl: i64 = v
                    .trim()
                    .parse()
                    .with_context(|| format!("JWT_TTL_SECS is not a number: {v}"))?;
                if ttl <= 0 {
                    bail!("JWT_TTL_SECS must be positive");
                }
                if ttl > MAX_TOKEN_TTL_SECS {
                    bail!("JWT_TTL_SECS must not exceed {MAX_TOKEN_TTL_SECS}");
                }
                ttl
            }
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let jwt_issuer = var("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string());

        let password_pepper = var("PASSWORD_PEPPER").map(String::into_bytes);

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            jwt_secret,
            jwt_ttl_secs,
            jwt_issuer,
            password_pepper,
        })
    }

    /// Build the auth configuration
    ///
    /// Without `JWT_SECRET`, debug builds sign with a random per-process key
    /// and release builds refuse to start.
    pub fn auth_config(&self) -> anyhow::Result<AuthConfig> {
        let secret = match &self.jwt_secret {
            Some(secret) => secret.clone(),
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using a random signing key");
                platform::crypto::random_secret()
            }
            None => bail!("JWT_SECRET must be set in production"),
        };

        let token = TokenConfig::new(secret)
            .ttl(chrono::Duration::seconds(self.jwt_ttl_secs))
            .issuer(self.jwt_issuer.clone());

        let mut config = AuthConfig::new(token);
        if let Some(pepper) = &self.password_pepper {
            config = config.with_pepper(pepper.clone());
        }
        Ok(config)
    }
}
