use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::app_state::AppState;
use crate::domain::AccessClaims;
use crate::errors::AuthError;

/// Pull a bearer token out of an `Authorization` header value.
///
/// Only the exact form `Bearer <token>` is recognized (case-sensitive,
/// single space). Anything else means "no token present". Absence is a
/// normal result here, not an error; callers decide what it implies.
pub fn extract_bearer_token(header_value: Option<&str>) -> Option<&str> {
    header_value.and_then(|value| value.strip_prefix("Bearer "))
}

/// Extractor for protected routes: runs bearer extraction and access-token
/// verification, and hands the recovered claims to the handler. Outer
/// layers use those claims (user id, role) for their own authorization
/// checks.
pub struct AuthenticatedUser(pub AccessClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = extract_bearer_token(header_value).ok_or(AuthError::MissingToken)?;

        let claims = state
            .token_service
            .verify_access_token(token)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedUser(claims))
    }
}
