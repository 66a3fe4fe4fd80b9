pub mod context;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /activities/{activity}/context-search              free-text search
/// /activities/{activity}/context-search/references   hydrate a wire string
/// /activities/{activity}/{id}/context                attached targets
///
/// /context/resolve                                   wire string -> targets (POST)
/// /context/render                                    wire string -> widget value (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/activities", context::activity_router())
        .nest("/context", context::transform_router())
}
