//! Shared Kernel - vocabulary common to every finance-tracker crate
//!
//! This crate contains:
//! - The unified error type ([`error::app_error::AppError`]) and its HTTP mapping
//! - Typed record identifiers ([`id::Id`])
//!
//! Only things whose meaning is identical across the auth and finance
//! contexts belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
