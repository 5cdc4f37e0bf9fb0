use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefreshTokenError {
    #[error("Invalid token provided")]
    InvalidToken,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for RefreshTokenError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            RefreshTokenError::InvalidToken => StatusCode::UNAUTHORIZED,
            RefreshTokenError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
