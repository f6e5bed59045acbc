//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_user;
pub mod register;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
