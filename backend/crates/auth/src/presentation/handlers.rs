//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{CurrentUserUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{RegisterRequest, RegisterResponse, UserView};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<Json<RegisterResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        phone: req.phone,
        name: req.name,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(RegisterResponse {
        token: output.token,
        expires_at: output.expires_at,
        user: UserView::from(&output.user),
    }))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/auth/me
///
/// `/api/auth/` is outside the auth filter, so the token is checked here.
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<UserView>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(&headers)?;

    let use_case = CurrentUserUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(token).await?;

    Ok(Json(UserView::from(&user)))
}
