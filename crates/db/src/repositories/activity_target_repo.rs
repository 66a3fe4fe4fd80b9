//! Repository for the `activity_targets` table.

use contextlink_core::reference::EntityReference;
use contextlink_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity_target::ActivityTargetRow;

/// Column list for `activity_targets` queries.
const COLUMNS: &str = "activity_class, activity_id, target_class, target_id";

pub struct ActivityTargetRepo;

impl ActivityTargetRepo {
    /// Attach `target` to an activity. Attaching twice is a no-op.
    pub async fn attach(
        pool: &PgPool,
        activity_class: &str,
        activity_id: DbId,
        target: &EntityReference,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO activity_targets (activity_class, activity_id, target_class, target_id) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT DO NOTHING",
        )
        .bind(activity_class)
        .bind(activity_id)
        .bind(&target.entity_class)
        .bind(target.entity_id.as_key())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Links of one activity, oldest first.
    pub async fn list_for_activity(
        pool: &PgPool,
        activity_class: &str,
        activity_id: DbId,
    ) -> Result<Vec<ActivityTargetRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_targets \
             WHERE activity_class = $1 AND activity_id = $2 \
             ORDER BY id"
        );
        sqlx::query_as::<_, ActivityTargetRow>(&query)
            .bind(activity_class)
            .bind(activity_id)
            .fetch_all(pool)
            .await
    }
}
