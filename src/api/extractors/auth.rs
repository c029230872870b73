use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use crate::state::AppState;
use crate::domain::models::admin::AdminUser;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

pub const SESSION_COOKIE: &str = "admin_session";

/// Validates the session token minted by the external auth provider.
/// Accepts `Authorization: Bearer <token>` or the session cookie; the raw
/// token is hashed and looked up, so the store never sees plaintext tokens.
pub struct AdminAuth(pub AdminUser);

impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .or_else(|| cookie_token(parts))
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let user = app_state
            .session_repo
            .find_user_by_token_hash(&hash_token(&token))
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        if user.role != "admin" {
            return Err(StatusCode::UNAUTHORIZED);
        }

        Span::current().record("user_id", &user.id);

        Ok(AdminAuth(user))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let header = parts.headers.get("authorization")?.to_str().ok()?;
    header.strip_prefix("Bearer ").map(|t| t.to_string())
}

fn cookie_token(parts: &Parts) -> Option<String> {
    let cookies = parts.extensions.get::<Cookies>()?;
    cookies.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
