use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};
use serde_json::json;
use tower_sessions::Session;

use crate::model::api::EmptyDto;
use crate::model::comment::{CreateCommentDto, InboundEmailDto};
use crate::server::data::comment::CommentRepository;
use crate::server::data::post::PostRepository;
use crate::server::data::user::UserRepository;
use crate::server::error::AppError;
use crate::server::middleware::auth::AuthGuard;
use crate::server::model::comment::CommentWithAuthor;
use crate::server::service::comment::CommentService;
use crate::server::state::AppState;

/// GET /api/posts/{post_id}/comments
pub async fn find_for_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let post = PostRepository::new(&state.db)
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(String::from("Post not found")))?;

    let comments = CommentService::new(&state.db, &state.job_queue)
        .find_for_post(post.id, user.id)
        .await?;
    let dtos: Vec<_> = comments
        .into_iter()
        .map(CommentWithAuthor::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/posts/{post_id}/comments
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(dto): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let post = PostRepository::new(&state.db)
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(String::from("Post not found")))?;

    let comment = CommentService::new(&state.db, &state.job_queue)
        .create(user.id, &dto.text, &post)
        .await?;

    // a freshly-posted comment cannot have been thanked yet
    let dto = CommentWithAuthor {
        comment,
        author: Some(user),
        is_thanked: false,
    }
    .into_dto();

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /noo/hook/comment
///
/// Inbound-mail webhook. The recipient address carries the encrypted
/// post and user ids; the stripped reply body becomes the comment text.
/// No session here, the address itself is the credential.
pub async fn create_from_email(
    State(state): State<AppState>,
    Form(dto): Form<InboundEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    let reply = state.reply_codec.decode_post_reply_address(&dto.to)?;
    let post_id: i32 = reply
        .post_id
        .parse()
        .map_err(|_| AppError::BadRequest(String::from("Invalid reply address")))?;
    let user_id: i32 = reply
        .user_id
        .parse()
        .map_err(|_| AppError::BadRequest(String::from("Invalid reply address")))?;

    let post = PostRepository::new(&state.db)
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(String::from("Post not found")))?;
    let user = UserRepository::new(&state.db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(String::from("User not found")))?;

    state
        .analytics
        .track(user.id, "Post: Comment: Add by Email", json!({ "post_id": post.id }))
        .await;

    CommentService::new(&state.db, &state.job_queue)
        .create(user.id, &dto.stripped_text, &post)
        .await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}

/// POST /api/comments/{comment_id}/thank
pub async fn thank(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let comment = CommentRepository::new(&state.db)
        .find_by_id(comment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(String::from("Comment not found")))?;

    CommentService::new(&state.db, &state.job_queue)
        .toggle_thank(comment.id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}

/// DELETE /api/comments/{comment_id}
pub async fn destroy(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let comment = CommentRepository::new(&state.db)
        .find_by_id(comment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(String::from("Comment not found")))?;

    CommentService::new(&state.db, &state.job_queue)
        .deactivate(comment, user.id)
        .await?;

    Ok((StatusCode::OK, Json(EmptyDto {})))
}
