use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{Email, LoginRequestBody, LoginResponse, Password};
use crate::errors::LoginError;
use crate::services::AuthService;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(LoginError::InvalidPassword))?;

    let user = AuthService::login(state.clone(), email, password).await?;

    let issued = state
        .token_service
        .issue_token_pair(&user.user_id, user.email.as_ref(), user.role.as_deref())
        .map_err(|_| LoginError::InternalServerError)?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            message: "Logged in successfully".to_string(),
            access_token: issued.access_token,
            refresh_token: issued.refresh_token,
        }),
    ))
}
