use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use serde::Deserialize;
use tower_sessions::Session;

use crate::model::api::EmptyDto;
use crate::model::auth::{AdminUserDto, SessionUserDto};
use crate::server::error::{AppError, AuthError};
use crate::server::middleware::auth::{AuthGuard, SESSION_AUTH_USER_ID};
use crate::server::service::auth::{AuthService, Provider};
use crate::server::state::AppState;

const SESSION_OAUTH_CSRF_TOKEN: &str = "oauth:csrf_token";
const SESSION_ADMIN_EMAIL: &str = "admin:email";

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    code: String,
    state: String,
}

/// GET /noo/login/{provider}
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let provider = Provider::from_slug(&provider)
        .ok_or_else(|| AppError::NotFound(String::from("Unknown login provider")))?;

    let service = AuthService::new(
        &state.db,
        &state.http_client,
        state.oauth.for_provider(provider),
    );
    let (url, csrf_token) = service.login_url(provider);
    session
        .insert(SESSION_OAUTH_CSRF_TOKEN, csrf_token.secret())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /noo/login/{provider}/oauth
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let provider = Provider::from_slug(&provider)
        .ok_or_else(|| AppError::NotFound(String::from("Unknown login provider")))?;
    validate_csrf_token(&session, &params.state).await?;

    let service = AuthService::new(
        &state.db,
        &state.http_client,
        state.oauth.for_provider(provider),
    );
    let user = service.callback(provider, params.code).await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;
    tracing::info!("User {} logged in via {}", user.id, provider.slug());

    Ok((StatusCode::OK, Json(SessionUserDto::from(user))))
}

/// GET /admin/login
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.http_client, &state.oauth.admin);
    let (url, csrf_token) = service.admin_login_url();
    session
        .insert(SESSION_OAUTH_CSRF_TOKEN, csrf_token.secret())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /admin/login/oauth
pub async fn admin_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf_token(&session, &params.state).await?;

    let service = AuthService::new(&state.db, &state.http_client, &state.oauth.admin);
    let profile = service
        .admin_callback(params.code, &state.admin_email_domain)
        .await?;

    session.insert(SESSION_ADMIN_EMAIL, &profile.email).await?;
    tracing::info!("Admin {} logged in", profile.email);

    Ok((
        StatusCode::OK,
        Json(AdminUserDto {
            email: profile.email,
        }),
    ))
}

/// GET /api/user
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    Ok((StatusCode::OK, Json(SessionUserDto::from(user))))
}

/// GET /noo/logout
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;
    Ok((StatusCode::OK, Json(EmptyDto {})))
}

async fn validate_csrf_token(session: &Session, state: &str) -> Result<(), AppError> {
    let stored: Option<String> = session.remove(SESSION_OAUTH_CSRF_TOKEN).await?;
    match stored {
        Some(token) if token == state => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
