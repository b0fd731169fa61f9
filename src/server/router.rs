use axum::routing::{delete, get, post};
use axum::Router;

use crate::server::controller::{auth, comment, project};
use crate::server::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/posts/{post_id}/comments",
            get(comment::find_for_post).post(comment::create),
        )
        .route("/api/comments/{comment_id}/thank", post(comment::thank))
        .route("/api/comments/{comment_id}", delete(comment::destroy))
        .route("/api/projects/{project_id}", get(project::find))
        .route("/api/user", get(auth::get_user))
        .route("/noo/hook/comment", post(comment::create_from_email))
        .route("/noo/login/{provider}", get(auth::login))
        .route("/noo/login/{provider}/oauth", get(auth::callback))
        .route("/noo/logout", get(auth::logout))
        .route("/admin/login", get(auth::admin_login))
        .route("/admin/login/oauth", get(auth::admin_callback))
}
