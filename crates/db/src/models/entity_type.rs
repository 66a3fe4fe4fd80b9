//! Entity type metadata rows.

use contextlink_core::providers::EntityTypeConfig;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `entity_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntityTypeRow {
    pub entity_class: String,
    pub label: Option<String>,
    pub plural_alias: Option<String>,
    pub url_alias: Option<String>,
    pub icon: Option<String>,
    pub title_fields: Option<Vec<String>>,
    pub view_route: Option<String>,
    pub is_custom: bool,
    pub search_alias: Option<String>,
}

impl From<EntityTypeRow> for EntityTypeConfig {
    fn from(row: EntityTypeRow) -> Self {
        EntityTypeConfig {
            entity_class: row.entity_class,
            label: row.label,
            plural_alias: row.plural_alias,
            icon: row.icon,
            title_fields: row.title_fields,
            view_route: row.view_route,
            is_custom: row.is_custom,
        }
    }
}

/// DTO for registering an entity type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEntityType {
    pub entity_class: String,
    pub label: Option<String>,
    pub plural_alias: Option<String>,
    pub url_alias: Option<String>,
    pub icon: Option<String>,
    pub title_fields: Option<Vec<String>>,
    pub view_route: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
    pub search_alias: Option<String>,
}
