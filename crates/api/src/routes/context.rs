//! Route definitions for context resolution.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::context;
use crate::state::AppState;

/// Activity-scoped routes mounted at `/activities`.
///
/// ```text
/// GET /{activity}/context-search              -> search
/// GET /{activity}/context-search/references   -> search_by_references
/// GET /{activity}/{id}/context                -> activity_context
/// ```
pub fn activity_router() -> Router<AppState> {
    Router::new()
        .route("/{activity}/context-search", get(context::search))
        .route(
            "/{activity}/context-search/references",
            get(context::search_by_references),
        )
        .route("/{activity}/{id}/context", get(context::activity_context))
}

/// Editing-surface routes mounted at `/context`.
///
/// ```text
/// POST /resolve   -> resolve_value
/// POST /render    -> render_value
/// ```
pub fn transform_router() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(context::resolve_value))
        .route("/render", post(context::render_value))
}
