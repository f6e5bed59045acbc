//! Register Use Case
//!
//! Registration doubles as login: the first call for a phone number creates
//! the account, every later call must present the same password.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::phone_number::PhoneNumber;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub phone: String,
    pub name: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub token: String,
    /// Token expiry (Unix seconds)
    pub expires_at: i64,
    pub user: User,
}

/// Register-or-login use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let phone = PhoneNumber::new(input.phone)?;
        let password = ClearTextPassword::new(input.password)?;

        if let Some(existing) = self.user_repo.find_by_phone(&phone).await? {
            return self.login(existing, &password);
        }

        let password_hash = password.hash(self.config.pepper())?;
        let user = User::new(phone, input.name, password_hash);

        if !self.user_repo.create_if_absent(&user).await? {
            // Lost a race with a concurrent registration for the same phone
            let existing = self
                .user_repo
                .find_by_phone(&user.phone)
                .await?
                .ok_or_else(|| AuthError::Internal("conflicting user row vanished".to_string()))?;
            return self.login(existing, &password);
        }

        tracing::info!(
            user_id = %user.user_id,
            phone = %user.phone,
            "User registered"
        );

        self.issue(user)
    }

    fn login(&self, user: User, password: &ClearTextPassword) -> AuthResult<RegisterOutput> {
        if !user.password.verify(password, self.config.pepper()) {
            return Err(AuthError::InvalidPassword);
        }

        tracing::info!(user_id = %user.user_id, "User logged in");

        self.issue(user)
    }

    fn issue(&self, user: User) -> AuthResult<RegisterOutput> {
        let issued = self.config.tokens().issue(&user.user_id.to_string())?;

        Ok(RegisterOutput {
            token: issued.token,
            expires_at: issued.expires_at,
            user,
        })
    }
}
