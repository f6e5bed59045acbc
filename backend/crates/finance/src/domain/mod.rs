//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Transaction, Milestone, Analysis)
//! - Domain services (insight computation)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
