//! Auth Filter
//!
//! Runs once per request. Paths under [`PUBLIC_PREFIX`] pass
//! untouched; every other request must carry a valid bearer token, whose
//! subject is attached to the request as [`AuthenticatedUser`].

use axum::body::Body;
use axum::extract::{OriginalUri, State};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::error::AuthError;

/// Paths under this prefix bypass the filter
pub const PUBLIC_PREFIX: &str = "/api/auth/";

/// Filter state
#[derive(Clone)]
pub struct AuthFilterState {
    pub config: Arc<AuthConfig>,
}

impl AuthFilterState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Identity resolved from the bearer token, stored in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid bearer token outside [`PUBLIC_PREFIX`]
pub async fn require_bearer_token(
    State(state): State<AuthFilterState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    if is_public(&req) {
        return Ok(next.run(req).await);
    }

    let user = authenticate(&state.config, &req).map_err(IntoResponse::into_response)?;

    tracing::debug!(user_id = %user.user_id, path = %req.uri().path(), "Authenticated request");

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Judged on the full request path, even when the filter runs inside a nested router
fn is_public(req: &Request<Body>) -> bool {
    let path = match req.extensions().get::<OriginalUri>() {
        Some(OriginalUri(uri)) => uri.path(),
        None => req.uri().path(),
    };
    path.starts_with(PUBLIC_PREFIX)
}

fn authenticate(config: &AuthConfig, req: &Request<Body>) -> Result<AuthenticatedUser, AuthError> {
    let token = extract_bearer(req.headers())?;
    let claims = config.tokens().validate(token)?;
    let user_id = UserId::parse(&claims.sub).ok_or(AuthError::InvalidToken)?;

    Ok(AuthenticatedUser { user_id })
}
