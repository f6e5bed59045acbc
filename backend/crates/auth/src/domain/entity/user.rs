//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::phone_number::PhoneNumber;

/// User entity
///
/// Created on the first registration for a phone number and never deleted.
/// Only the Argon2 hash of the password is held.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique login identity
    pub phone: PhoneNumber,
    /// Display name given at registration
    pub name: String,
    pub password: HashedPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(phone: PhoneNumber, name: impl Into<String>, password: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            phone,
            name: name.into(),
            password,
            created_at: Utc::now(),
        }
    }
}
