use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tower_sessions::Session;

use crate::model::project::ProjectDto;
use crate::server::error::AppError;
use crate::server::middleware::auth::AuthGuard;
use crate::server::middleware::project::ProjectGuard;
use crate::server::state::AppState;

/// GET /api/projects/{project_id}
pub async fn find(
    State(state): State<AppState>,
    session: Session,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let project = ProjectGuard::new(&state.db)
        .require(&user, project_id)
        .await?;

    Ok((StatusCode::OK, Json(ProjectDto::from(project))))
}
