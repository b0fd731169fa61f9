use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::model::api::ErrorDto;
use crate::server::error::internal_server_error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No user id in session")]
    UserNotInSession,

    #[error("User {0} in session but not in database")]
    UserNotInDatabase(i32),

    #[error("User {user_id} denied: {reason}")]
    AccessDenied { user_id: i32, reason: String },

    #[error("OAuth state mismatch")]
    CsrfValidationFailed,

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("{0}")]
    NotAuthorized(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::AccessDenied { .. } => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: String::from("Forbidden"),
                    }),
                )
                    .into_response()
            }
            Self::NotAuthorized(message) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchange(_) => {
                tracing::error!("{}", self);
                internal_server_error()
            }
        }
    }
}
