//! Links between activities and their targets.

use contextlink_core::entity::EntityId;
use contextlink_core::reference::EntityReference;
use contextlink_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `activity_targets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityTargetRow {
    pub activity_class: String,
    pub activity_id: DbId,
    pub target_class: String,
    pub target_id: String,
}

impl ActivityTargetRow {
    pub fn target(&self) -> EntityReference {
        EntityReference::new(self.target_class.clone(), EntityId::from_key(&self.target_id))
    }
}
