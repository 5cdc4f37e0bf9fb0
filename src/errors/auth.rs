use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

/// Rejection of the `AuthenticatedUser` extractor. Both variants map to
/// 401: a missing credential and an invalid one look the same to clients.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token not provided")]
    MissingToken,

    #[error("Invalid token provided")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
        };

        (status, self.to_string()).into_response()
    }
}
