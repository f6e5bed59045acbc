//! Current User Use Case
//!
//! Resolves a bearer token to the stored user.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Current user use case
pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        if token.trim().is_empty() {
            return Err(AuthError::MissingAuthorization);
        }

        let claims = self.config.tokens().validate(token)?;
        let user_id = UserId::parse(&claims.sub).ok_or(AuthError::InvalidToken)?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::debug!(user_id = %user.user_id, "Resolved current user");

        Ok(user)
    }
}
