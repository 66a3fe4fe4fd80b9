//! Target records hydrated by id.

use contextlink_core::entity::{EntityId, TargetEntity};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `entity_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntityRecordRow {
    pub entity_class: String,
    pub entity_id: String,
    pub display_name: String,
    pub fields: serde_json::Value,
}

impl From<EntityRecordRow> for TargetEntity {
    fn from(row: EntityRecordRow) -> Self {
        let mut entity = TargetEntity::new(row.entity_class, EntityId::from_key(&row.entity_id))
            .with_display_name(row.display_name);
        if let serde_json::Value::Object(fields) = row.fields {
            entity.fields = fields;
        }
        entity
    }
}

/// DTO for storing a record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntityRecord {
    pub entity_class: String,
    pub entity_id: EntityId,
    pub display_name: String,
    pub fields: serde_json::Value,
}
