//! Search index rows.

use contextlink_core::entity::EntityId;
use contextlink_core::providers::IndexHit;
use contextlink_core::reference::EntityReference;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One hit returned by the full-text query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SearchHitRow {
    pub entity_class: String,
    pub entity_id: String,
    pub title: String,
}

impl From<SearchHitRow> for IndexHit {
    fn from(row: SearchHitRow) -> Self {
        IndexHit {
            reference: EntityReference::new(row.entity_class, EntityId::from_key(&row.entity_id)),
            title: row.title,
        }
    }
}

/// DTO for indexing a record under an alias.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSearchEntry {
    pub entity_class: String,
    pub search_alias: String,
    pub entity_id: EntityId,
    pub title: String,
}
