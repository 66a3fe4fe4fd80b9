//! Repository for the shared `search_index` table.

use sqlx::PgPool;

use crate::models::search::{CreateSearchEntry, SearchHitRow};

/// Full-text lookups across every indexed entity type.
pub struct SearchIndexRepo;

impl SearchIndexRepo {
    /// Index a record, replacing its previous entry.
    pub async fn upsert(pool: &PgPool, input: &CreateSearchEntry) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO search_index (entity_class, search_alias, entity_id, title) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT uq_search_index_entity DO UPDATE SET \
                search_alias = EXCLUDED.search_alias, title = EXCLUDED.title",
        )
        .bind(&input.entity_class)
        .bind(&input.search_alias)
        .bind(input.entity_id.as_key())
        .bind(&input.title)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Rows under `aliases` matching `tsquery`, ordered by title.
    ///
    /// A `None` query matches every row under the aliases.
    pub async fn simple_search(
        pool: &PgPool,
        tsquery: Option<&str>,
        aliases: &[String],
        offset: i64,
        limit: i64,
    ) -> Result<Vec<SearchHitRow>, sqlx::Error> {
        sqlx::query_as::<_, SearchHitRow>(
            "SELECT entity_class, entity_id, title FROM search_index \
             WHERE search_alias = ANY($1) \
               AND ($2::TEXT IS NULL OR search_vector @@ to_tsquery('simple', $2)) \
             ORDER BY title, entity_class, entity_id \
             LIMIT $3 OFFSET $4",
        )
        .bind(aliases)
        .bind(tsquery)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }
}
