mod auth;
mod config;
mod reply_address;

pub use auth::AuthError;
pub use config::ConfigError;
pub use reply_address::ReplyAddressError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Top-level application error. Every controller returns this, and its
/// `IntoResponse` impl decides the status code and body the client sees.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    ReplyAddressErr(#[from] ReplyAddressError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ReplyAddressErr(err) => err.into_response(),
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: message })).into_response()
            }
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err => {
                tracing::error!("{}", err);
                internal_server_error()
            }
        }
    }
}

/// Generic 500 body; internal detail stays in the logs.
pub fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            error: String::from("Internal server error"),
        }),
    )
        .into_response()
}
