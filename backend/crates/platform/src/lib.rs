//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random secrets, Base64)
//! - Password hashing (Argon2id)
//! - Signed, time-bound identity tokens (JWT, HS256)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod crypto;
pub mod password;
pub mod token;
