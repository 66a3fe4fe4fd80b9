//! Repository for the `entity_types` table.

use sqlx::PgPool;

use crate::models::entity_type::{CreateEntityType, EntityTypeRow};

/// Column list for `entity_types` queries.
const COLUMNS: &str = "\
    entity_class, label, plural_alias, url_alias, icon, title_fields, \
    view_route, is_custom, search_alias";

/// Provides lookups over entity type metadata.
pub struct EntityTypeRepo;

impl EntityTypeRepo {
    /// Register a type, replacing any existing row for the same class.
    pub async fn upsert(pool: &PgPool, input: &CreateEntityType) -> Result<EntityTypeRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO entity_types \
                (entity_class, label, plural_alias, url_alias, icon, title_fields, \
                 view_route, is_custom, search_alias) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (entity_class) DO UPDATE SET \
                label = EXCLUDED.label, plural_alias = EXCLUDED.plural_alias, \
                url_alias = EXCLUDED.url_alias, icon = EXCLUDED.icon, \
                title_fields = EXCLUDED.title_fields, view_route = EXCLUDED.view_route, \
                is_custom = EXCLUDED.is_custom, search_alias = EXCLUDED.search_alias \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EntityTypeRow>(&query)
            .bind(&input.entity_class)
            .bind(&input.label)
            .bind(&input.plural_alias)
            .bind(&input.url_alias)
            .bind(&input.icon)
            .bind(&input.title_fields)
            .bind(&input.view_route)
            .bind(input.is_custom)
            .bind(&input.search_alias)
            .fetch_one(pool)
            .await
    }

    /// Find a type by its class name.
    pub async fn find_by_class(
        pool: &PgPool,
        entity_class: &str,
    ) -> Result<Option<EntityTypeRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entity_types WHERE entity_class = $1");
        sqlx::query_as::<_, EntityTypeRow>(&query)
            .bind(entity_class)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a class name, URL alias or URL-safe class name (`\` written
    /// as `_`) to the stored class name.
    pub async fn resolve_class(
        pool: &PgPool,
        class_or_alias: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT entity_class FROM entity_types \
             WHERE entity_class = $1 \
                OR url_alias = $1 \
                OR replace(entity_class, '\\', '_') = $1 \
             ORDER BY (entity_class = $1) DESC, id \
             LIMIT 1",
        )
        .bind(class_or_alias)
        .fetch_optional(pool)
        .await
    }

    /// Search alias of a type, if it is indexed.
    pub async fn search_alias(
        pool: &PgPool,
        entity_class: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        let alias = sqlx::query_scalar::<_, Option<String>>(
            "SELECT search_alias FROM entity_types WHERE entity_class = $1",
        )
        .bind(entity_class)
        .fetch_optional(pool)
        .await?;
        Ok(alias.flatten().filter(|alias| !alias.is_empty()))
    }
}
