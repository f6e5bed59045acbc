//! PhoneNumber Value Object
//!
//! The phone number is the login identity. It is stored exactly as
//! submitted apart from surrounding whitespace; no format is imposed.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::phone_number::PhoneNumber;
//!
//! let phone = PhoneNumber::new("  +15550001111 ").unwrap();
//! assert_eq!(phone.as_str(), "+15550001111");
//! ```

use derive_more::Display;
use thiserror::Error;

/// Phone number validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    #[error("Phone number cannot be empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> Result<Self, PhoneNumberError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PhoneNumberError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
