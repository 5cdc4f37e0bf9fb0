use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{Email, RefreshRequestBody, RefreshResponse};
use crate::errors::RefreshTokenError;
use crate::services::token_service::{IssueError, RefreshError};

// Exchange a refresh token for a fresh access + refresh pair. The new
// refresh token carries the presented token_version forward; the role is
// re-read from the user store so permission changes take effect on rotation.
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequestBody>,
) -> Result<impl IntoResponse, RefreshTokenError> {
    let claims = state
        .token_service
        .verify_refresh_token(&request.refresh_token)
        .map_err(|err| match err {
            RefreshError::InvalidToken => RefreshTokenError::InvalidToken,
            RefreshError::MissingSecret => RefreshTokenError::InternalServerError,
        })?;

    // Invalidation hook: a storage-backed version store can reject tokens
    // minted before the user's counter was bumped.
    if !state
        .token_version_store
        .is_current(&claims.sub, claims.token_version)
        .await
    {
        return Err(RefreshTokenError::InvalidToken);
    }

    let email = Email::parse(claims.email).map_err(|_| RefreshTokenError::InvalidToken)?;
    let user = state
        .user_store
        .read()
        .await
        .get_user(&email)
        .await
        .map_err(|_| RefreshTokenError::InvalidToken)?;

    let map_issue = |err: IssueError| match err {
        IssueError::MissingSecret | IssueError::Signing(_) => {
            RefreshTokenError::InternalServerError
        }
    };

    let access_token = state
        .token_service
        .issue_access_token(&user.user_id, user.email.as_ref(), user.role.as_deref())
        .map_err(map_issue)?;
    let refresh_token = state
        .token_service
        .issue_refresh_token(&user.user_id, user.email.as_ref(), claims.token_version)
        .map_err(map_issue)?;

    Ok((
        StatusCode::OK,
        Json(RefreshResponse {
            message: "Token refreshed successfully".to_string(),
            access_token,
            refresh_token,
        }),
    ))
}
