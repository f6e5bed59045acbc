//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the auth filter.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthFilterState, AuthenticatedUser, require_bearer_token};
pub use router::auth_router;
