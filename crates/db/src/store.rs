//! PostgreSQL implementation of the context collaborators.

use contextlink_core::context_transform::{in_wire_order, load_grouped};
use contextlink_core::entity::{EntityId, TargetEntity};
use contextlink_core::error::{CoreError, CoreResult};
use contextlink_core::providers::{
    ActivityTargets, AssociationRegistry, EntityLookup, EntityTypeConfig, IndexHit, SearchIndex,
    TypeMetadata,
};
use contextlink_core::search::build_prefix_tsquery;
use contextlink_core::translation::Catalog;
use contextlink_core::types::DbId;

use crate::repositories::{
    ActivityTargetRepo, AssociationRepo, EntityRecordRepo, EntityTypeRepo, SearchIndexRepo,
    TranslationRepo,
};
use crate::DbPool;

/// Context collaborators backed by one connection pool.
#[derive(Debug, Clone)]
pub struct PgContextStore {
    pool: DbPool,
}

impl PgContextStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Message catalog of `locale`.
    pub async fn load_catalog(&self, locale: &str) -> CoreResult<Catalog> {
        let rows = TranslationRepo::list_for_locale(&self.pool, locale)
            .await
            .map_err(unavailable)?;
        Ok(rows.into_iter().map(|row| (row.key, row.value)).collect())
    }
}

fn unavailable(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Context store query failed");
    CoreError::Unavailable(err.to_string())
}

fn keys(ids: &[EntityId]) -> Vec<String> {
    ids.iter().map(EntityId::as_key).collect()
}

impl SearchIndex for PgContextStore {
    async fn simple_search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
        aliases: &[String],
        page: i64,
    ) -> CoreResult<Vec<IndexHit>> {
        let tsquery = if query.trim().is_empty() {
            None
        } else {
            match build_prefix_tsquery(query) {
                Some(tsquery) => Some(tsquery),
                None => return Ok(Vec::new()),
            }
        };
        tracing::debug!(query, page, limit, aliases = aliases.len(), "Running context search");

        let rows = SearchIndexRepo::simple_search(&self.pool, tsquery.as_deref(), aliases, offset, limit)
            .await
            .map_err(unavailable)?;
        Ok(rows.into_iter().map(IndexHit::from).collect())
    }

    async fn alias_for(&self, entity_class: &str) -> CoreResult<Option<String>> {
        EntityTypeRepo::search_alias(&self.pool, entity_class)
            .await
            .map_err(unavailable)
    }
}

impl AssociationRegistry for PgContextStore {
    async fn resolve_activity_class(&self, class_or_alias: &str) -> CoreResult<Option<String>> {
        EntityTypeRepo::resolve_class(&self.pool, class_or_alias)
            .await
            .map_err(unavailable)
    }

    async fn association_targets(&self, activity_class: &str) -> CoreResult<Vec<String>> {
        AssociationRepo::targets_of(&self.pool, activity_class)
            .await
            .map_err(unavailable)
    }
}

impl EntityLookup for PgContextStore {
    async fn find_by_ids(&self, entity_class: &str, ids: &[EntityId]) -> CoreResult<Vec<TargetEntity>> {
        let rows = EntityRecordRepo::find_by_ids(&self.pool, entity_class, &keys(ids))
            .await
            .map_err(unavailable)?;
        Ok(rows.into_iter().map(TargetEntity::from).collect())
    }
}

impl TypeMetadata for PgContextStore {
    async fn entity_config(&self, entity_class: &str) -> CoreResult<Option<EntityTypeConfig>> {
        let row = EntityTypeRepo::find_by_class(&self.pool, entity_class)
            .await
            .map_err(unavailable)?;
        Ok(row.map(EntityTypeConfig::from))
    }
}

impl ActivityTargets for PgContextStore {
    /// Attached records in link order; links to deleted records are skipped.
    async fn activity_targets(
        &self,
        activity_class: &str,
        activity_id: DbId,
    ) -> CoreResult<Vec<TargetEntity>> {
        let links = ActivityTargetRepo::list_for_activity(&self.pool, activity_class, activity_id)
            .await
            .map_err(unavailable)?;
        let refs: Vec<_> = links.iter().map(|link| link.target()).collect();

        let found = load_grouped(self, &refs).await?;
        Ok(in_wire_order(&found, &refs))
    }
}
