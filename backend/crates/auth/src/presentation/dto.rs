//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Register
// ============================================================================

/// Register-or-login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub phone: String,
    #[serde(default)]
    pub name: String,
    pub password: String,
}

/// Register-or-login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub token: String,
    /// Token expiry (Unix seconds)
    pub expires_at: i64,
    pub user: UserView,
}

// ============================================================================
// User
// ============================================================================

/// Public view of a user (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub phone: String,
    pub name: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            phone: user.phone.to_string(),
            name: user.name.clone(),
        }
    }
}
