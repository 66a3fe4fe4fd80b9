//! Query parameter and request body types for the context handlers.

use serde::Deserialize;

/// Largest page size a caller may request.
pub const MAX_PER_PAGE: i64 = 100;

/// `?q=&page=&per_page=` for free-text context search.
#[derive(Debug, Default, Deserialize)]
pub struct ContextSearchParams {
    #[serde(default)]
    pub q: String,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// `?targets=` carrying a wire string of reference tokens.
#[derive(Debug, Default, Deserialize)]
pub struct ReferenceSearchParams {
    #[serde(default)]
    pub targets: String,
}

/// `?exclude_actor=` for the activity context listing.
#[derive(Debug, Deserialize)]
pub struct ActivityContextParams {
    #[serde(default = "default_exclude_actor")]
    pub exclude_actor: bool,
}

fn default_exclude_actor() -> bool {
    true
}

/// Body of the editing-surface endpoints: the stored wire string.
#[derive(Debug, Deserialize)]
pub struct ContextValue {
    #[serde(default)]
    pub value: String,
}
