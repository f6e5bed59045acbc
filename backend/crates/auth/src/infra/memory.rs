//! In-memory repository used by the crate's tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::phone_number::PhoneNumber;
use crate::error::AuthResult;

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get(&self, user_id: &UserId) -> Option<User> {
        self.users.lock().unwrap().get(user_id).cloned()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_phone(&self, phone: &PhoneNumber) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| &u.phone == phone).cloned())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.get(user_id))
    }

    async fn create_if_absent(&self, user: &User) -> AuthResult<bool> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.phone == user.phone) {
            return Ok(false);
        }
        users.insert(user.user_id, user.clone());
        Ok(true)
    }
}
