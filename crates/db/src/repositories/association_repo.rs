//! Repository for the `activity_associations` table.

use sqlx::PgPool;

/// Which target types each activity type may be linked to.
pub struct AssociationRepo;

impl AssociationRepo {
    /// Allow `activity_class` to link to `target_class`.
    pub async fn associate(
        pool: &PgPool,
        activity_class: &str,
        target_class: &str,
        position: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO activity_associations (activity_class, target_class, position) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (activity_class, target_class) DO UPDATE SET position = EXCLUDED.position",
        )
        .bind(activity_class)
        .bind(target_class)
        .bind(position)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Target classes of `activity_class`, in configured order.
    pub async fn targets_of(pool: &PgPool, activity_class: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT target_class FROM activity_associations \
             WHERE activity_class = $1 \
             ORDER BY position, id",
        )
        .bind(activity_class)
        .fetch_all(pool)
        .await
    }
}
