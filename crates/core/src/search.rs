//! Paginated free-text search across the target types of an activity.
//!
//! Pagination uses a peek-one-ahead window: `per_page + 1` rows are
//! requested and a full window means another page exists. No count query
//! is issued.

use crate::error::CoreResult;
use crate::providers::{IndexHit, SearchIndex};

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page used when the caller passes a non-positive page.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller passes a non-positive page size.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// A normalized page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub per_page: i64,
}

impl PageWindow {
    /// Replace non-positive values with [`DEFAULT_PAGE`] / [`DEFAULT_PER_PAGE`].
    pub fn normalize(page: i64, per_page: i64) -> Self {
        Self {
            page: if page > 0 { page } else { DEFAULT_PAGE },
            per_page: if per_page > 0 {
                per_page
            } else {
                DEFAULT_PER_PAGE
            },
        }
    }

    /// Index of the first row of the page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Rows to request: one more than the page size.
    pub fn fetch_limit(&self) -> i64 {
        self.per_page.saturating_add(1)
    }
}

/// Raw (pre-projection) hits of one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub items: Vec<IndexHit>,
    pub has_more: bool,
}

/// Run one page of `query` against `index`, scoped to `aliases`.
///
/// An empty alias set returns an empty page without touching the index.
/// Index failures propagate unchanged.
pub async fn search_page<I: SearchIndex>(
    index: &I,
    query: &str,
    page: i64,
    per_page: i64,
    aliases: &[String],
) -> CoreResult<SearchPage> {
    let window = PageWindow::normalize(page, per_page);

    if aliases.is_empty() {
        return Ok(SearchPage::default());
    }

    let limit = window.fetch_limit();
    let mut items = index
        .simple_search(query, window.offset(), limit, aliases, window.page)
        .await?;

    let has_more = items.len() as i64 == limit;
    if has_more {
        items.truncate(window.per_page as usize);
    }

    Ok(SearchPage { items, has_more })
}

// ---------------------------------------------------------------------------
// Query text helpers
// ---------------------------------------------------------------------------

/// Split user input into terms usable in a `tsquery`.
///
/// Keeps only alphanumeric characters and `_` inside each term and drops
/// terms left empty. Returns `None` if nothing usable remains.
pub fn sanitize_terms(query: &str) -> Option<Vec<String>> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|t| {
            t.chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect::<String>()
        })
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

/// Build a prefix `tsquery` for search-as-you-type.
///
/// All terms must match; the last one matches by prefix.
///
/// # Examples
///
/// ```
/// use contextlink_core::search::build_prefix_tsquery;
/// assert_eq!(build_prefix_tsquery("joh"), Some("joh:*".to_string()));
/// assert_eq!(build_prefix_tsquery("john sm"), Some("john & sm:*".to_string()));
/// assert_eq!(build_prefix_tsquery("  "), None);
/// ```
pub fn build_prefix_tsquery(query: &str) -> Option<String> {
    let mut terms = sanitize_terms(query)?;
    if let Some(last) = terms.last_mut() {
        last.push_str(":*");
    }
    Some(terms.join(" & "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
