//! Repository for the `entity_records` table.

use sqlx::PgPool;

use crate::models::entity_record::{CreateEntityRecord, EntityRecordRow};

/// Column list for `entity_records` queries.
const COLUMNS: &str = "entity_class, entity_id, display_name, fields";

pub struct EntityRecordRepo;

impl EntityRecordRepo {
    pub async fn upsert(
        pool: &PgPool,
        input: &CreateEntityRecord,
    ) -> Result<EntityRecordRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO entity_records (entity_class, entity_id, display_name, fields) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (entity_class, entity_id) DO UPDATE SET \
                display_name = EXCLUDED.display_name, fields = EXCLUDED.fields \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EntityRecordRow>(&query)
            .bind(&input.entity_class)
            .bind(input.entity_id.as_key())
            .bind(&input.display_name)
            .bind(&input.fields)
            .fetch_one(pool)
            .await
    }

    /// Records of one class whose keys are in `ids`, in insertion order.
    /// Unknown keys are ignored.
    pub async fn find_by_ids(
        pool: &PgPool,
        entity_class: &str,
        ids: &[String],
    ) -> Result<Vec<EntityRecordRow>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM entity_records \
             WHERE entity_class = $1 AND entity_id = ANY($2) \
             ORDER BY id"
        );
        sqlx::query_as::<_, EntityRecordRow>(&query)
            .bind(entity_class)
            .bind(ids)
            .fetch_all(pool)
            .await
    }
}
