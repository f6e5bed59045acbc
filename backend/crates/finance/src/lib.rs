//! Finance Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, insight computation, repository traits
//! - `application/` - Transaction, milestone and analysis services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every route here sits behind the auth filter from the `auth` crate.
//! Records are not scoped to the authenticated user.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{FinanceError, FinanceResult};
pub use infra::postgres::PgFinanceRepository;
pub use presentation::router::finance_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::infra::postgres::PgFinanceRepository as FinanceStore;
}
