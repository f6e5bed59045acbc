//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, auth filter
//!
//! ## Features
//! - Register-or-login by phone number + password (first call registers)
//! - Stateless bearer tokens (JWT, HS256)
//! - Auth filter guarding every route outside `/api/auth/`
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application-wide pepper
//! - Tokens are signed, carry the user id as subject, and expire
//! - Phone uniqueness enforced by the store (`ON CONFLICT DO NOTHING`)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthFilterState, AuthenticatedUser, require_bearer_token};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgUserRepository as UserStore;
}
