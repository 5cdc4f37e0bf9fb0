use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::VerifyTokenRequestBody;
use crate::errors::VerifyTokenError;
use crate::services::token_service::AccessError;

pub async fn verify_token(
    State(state): State<AppState>,
    Json(request): Json<VerifyTokenRequestBody>,
) -> Result<impl IntoResponse, VerifyTokenError> {
    state
        .token_service
        .verify_access_token(&request.token)
        .map_err(|err| match err {
            AccessError::InvalidToken => VerifyTokenError::InvalidToken,
            AccessError::MissingSecret => VerifyTokenError::InternalServerError,
        })?;

    Ok(StatusCode::OK)
}
