//! Handlers for context search, the activity context listing and the
//! editing-surface transform.
//!
//! All endpoints require authentication via [`AuthUser`]; the authenticated
//! actor is never offered as a target.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use contextlink_core::error::CoreError;
use contextlink_core::search::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use contextlink_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{
    ActivityContextParams, ContextSearchParams, ContextValue, ReferenceSearchParams, MAX_PER_PAGE,
};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// GET /api/v1/activities/{activity}/context-search
///
/// Free-text search over every target type linkable to `activity`.
/// Responds with `{ results: [{id, text}], more }`.
pub async fn search(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(activity): Path<String>,
    Query(params): Query<ContextSearchParams>,
) -> AppResult<impl IntoResponse> {
    let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE);
    if per_page > MAX_PER_PAGE {
        return Err(CoreError::Validation(format!(
            "per_page must be at most {MAX_PER_PAGE}"
        ))
        .into());
    }
    let page = params.page.unwrap_or(DEFAULT_PAGE);

    let service = state.context_service().await?;
    let results = service
        .search(&activity, &params.q, page, per_page, &auth.actor)
        .await?;

    tracing::debug!(
        activity = %activity,
        query = %params.q,
        page,
        results = results.results.len(),
        more = results.more,
        "Context search"
    );

    Ok(Json(results))
}

/// GET /api/v1/activities/{activity}/context-search/references
///
/// Hydrate the `targets` wire string into display records, in wire order.
pub async fn search_by_references(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(activity): Path<String>,
    Query(params): Query<ReferenceSearchParams>,
) -> AppResult<impl IntoResponse> {
    let service = state.context_service().await?;
    let results = service
        .search_by_references(&params.targets, &auth.actor)
        .await?;

    tracing::debug!(
        activity = %activity,
        results = results.results.len(),
        "Context reference search"
    );

    Ok(Json(results))
}

// ---------------------------------------------------------------------------
// Activity context
// ---------------------------------------------------------------------------

/// GET /api/v1/activities/{activity}/{id}/context
///
/// Targets attached to one activity. The actor is left out unless
/// `exclude_actor=false`.
pub async fn activity_context(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((activity, id)): Path<(String, DbId)>,
    Query(params): Query<ActivityContextParams>,
) -> AppResult<impl IntoResponse> {
    let exclude = params.exclude_actor.then_some(&auth.actor);

    let service = state.unlabeled_context_service();
    let items = service.resolve_context(&activity, id, exclude).await?;

    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// Editing surface
// ---------------------------------------------------------------------------

/// POST /api/v1/context/resolve
///
/// Turn a submitted wire string into the live target records.
pub async fn resolve_value(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<ContextValue>,
) -> AppResult<impl IntoResponse> {
    let service = state.unlabeled_context_service();
    let targets = service.transform().deserialize(&body.value).await?;

    Ok(Json(DataResponse { data: targets }))
}

/// POST /api/v1/context/render
///
/// Re-render a stored wire string for the select widget, in stored order.
pub async fn render_value(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<ContextValue>,
) -> AppResult<impl IntoResponse> {
    let service = state.context_service().await?;
    let value = service.transform().render(&body.value, &auth.actor).await?;

    Ok(Json(DataResponse { data: value }))
}
