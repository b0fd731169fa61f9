use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure modes when decoding an inbound reply address. All of these
/// mean the hook payload is unusable, so each maps to a 400 with a
/// distinct message.
#[derive(Error, Debug, PartialEq)]
pub enum ReplyAddressError {
    #[error("Not a reply address: {0}")]
    NotAReplyAddress(String),

    #[error("Reply token is not valid base64")]
    UndecodableToken,

    #[error("Reply token failed to decrypt")]
    DecryptionFailed,

    #[error("Reply payload is missing the expected prefix")]
    MissingSaltPrefix,

    #[error("Reply payload is malformed")]
    MalformedPayload,
}

impl IntoResponse for ReplyAddressError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
