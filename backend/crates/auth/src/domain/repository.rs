//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::phone_number::PhoneNumber;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by phone number
    async fn find_by_phone(&self, phone: &PhoneNumber) -> AuthResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Insert the user unless the phone number is already registered
    ///
    /// Returns `false` when another row already holds the phone number.
    /// The check and the insert are a single atomic store operation.
    async fn create_if_absent(&self, user: &User) -> AuthResult<bool>;
}
