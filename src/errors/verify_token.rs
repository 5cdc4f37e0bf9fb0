use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyTokenError {
    #[error("Invalid token provided")]
    InvalidToken,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for VerifyTokenError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            VerifyTokenError::InvalidToken => StatusCode::UNAUTHORIZED,
            VerifyTokenError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
