use std::sync::Arc;

use contextlink_core::error::CoreResult;
use contextlink_core::service::ContextService;
use contextlink_core::translation::Catalog;
use contextlink_db::PgContextStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: contextlink_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn context_store(&self) -> PgContextStore {
        PgContextStore::new(self.pool.clone())
    }

    /// Context service for one request, with the configured locale's labels.
    pub async fn context_service(&self) -> CoreResult<ContextService<PgContextStore, Catalog>> {
        let store = self.context_store();
        let catalog = store.load_catalog(&self.config.locale).await?;
        Ok(ContextService::new(store, catalog))
    }

    /// Context service with an empty catalog, for operations that never
    /// render a type label. Skips the translation query.
    pub fn unlabeled_context_service(&self) -> ContextService<PgContextStore, Catalog> {
        ContextService::new(self.context_store(), Catalog::default())
    }
}
