//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::phone_number::PhoneNumber;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn find_by_phone(&self, phone: &PhoneNumber) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                phone,
                name,
                password_hash,
                created_at
            FROM users
            WHERE phone = $1
            "#,
        )
        .bind(phone.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                phone,
                name,
                password_hash,
                created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn create_if_absent(&self, user: &User) -> AuthResult<bool> {
        let inserted = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (
                user_id,
                phone,
                name,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (phone) DO NOTHING
            RETURNING user_id
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.phone.as_str())
        .bind(&user.name)
        .bind(user.password.as_phc_string())
        .bind(user.created_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(inserted.is_some())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    phone: String,
    name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let phone = PhoneNumber::new(self.phone)
            .map_err(|e| AuthError::Internal(format!("Stored phone number invalid: {}", e)))?;
        let password = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Stored password hash invalid: {}", e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            phone,
            name: self.name,
            password,
            created_at: self.created_at,
        })
    }
}
