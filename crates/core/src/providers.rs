//! Collaborator interfaces consumed by context resolution.
//!
//! Each trait is a narrow port onto an external system (search index,
//! configuration store, record store). Implementations live outside this
//! crate; the PostgreSQL ones are in `contextlink-db`.

use std::future::Future;

use crate::entity::{EntityId, TargetEntity};
use crate::error::CoreResult;
use crate::reference::EntityReference;
use crate::types::DbId;

/// One row returned by the full-text index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexHit {
    pub reference: EntityReference,
    pub title: String,
}

/// Per-type configuration kept by the metadata provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityTypeConfig {
    pub entity_class: String,
    /// Translation key of the human label.
    pub label: Option<String>,
    pub plural_alias: Option<String>,
    pub icon: Option<String>,
    /// Fields whose values, space-joined, form a record's title.
    pub title_fields: Option<Vec<String>>,
    /// View route template with an `{id}` placeholder.
    pub view_route: Option<String>,
    /// Created at runtime rather than shipped with the application.
    pub is_custom: bool,
}

impl EntityTypeConfig {
    pub fn new(entity_class: impl Into<String>) -> Self {
        Self {
            entity_class: entity_class.into(),
            ..Self::default()
        }
    }

    /// Label key, when one is configured and non-empty.
    pub fn label_key(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }

    /// Configured title fields; an empty list counts as unconfigured.
    pub fn title_fields(&self) -> Option<&[String]> {
        self.title_fields
            .as_deref()
            .filter(|fields| !fields.is_empty())
    }
}

/// Full-text index spanning every searchable entity type.
pub trait SearchIndex: Send + Sync {
    /// Return up to `limit` rows matching `query`, starting at `offset`,
    /// scoped to `aliases`.
    fn simple_search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
        aliases: &[String],
        page: i64,
    ) -> impl Future<Output = CoreResult<Vec<IndexHit>>> + Send;

    /// The index alias of `entity_class`, or `None` when the type is not indexed.
    fn alias_for(&self, entity_class: &str)
        -> impl Future<Output = CoreResult<Option<String>>> + Send;
}

/// Configuration-backed mapping of activity types to linkable target types.
pub trait AssociationRegistry: Send + Sync {
    /// Resolve a class name, URL alias or URL-safe class name to a known
    /// activity class.
    fn resolve_activity_class(
        &self,
        class_or_alias: &str,
    ) -> impl Future<Output = CoreResult<Option<String>>> + Send;

    /// Target entity classes for `activity_class`, in configured order.
    fn association_targets(
        &self,
        activity_class: &str,
    ) -> impl Future<Output = CoreResult<Vec<String>>> + Send;
}

/// Batched record lookup, one call per entity type.
pub trait EntityLookup: Send + Sync {
    /// Load the records of `entity_class` whose ids are in `ids`. Ids that do
    /// not exist are simply absent from the result.
    fn find_by_ids(
        &self,
        entity_class: &str,
        ids: &[EntityId],
    ) -> impl Future<Output = CoreResult<Vec<TargetEntity>>> + Send;
}

/// Per-type labels, title fields and presentation hints.
pub trait TypeMetadata: Send + Sync {
    fn entity_config(
        &self,
        entity_class: &str,
    ) -> impl Future<Output = CoreResult<Option<EntityTypeConfig>>> + Send;
}

/// Stored activity-to-target associations.
pub trait ActivityTargets: Send + Sync {
    /// Records currently associated with the activity `(activity_class, activity_id)`.
    fn activity_targets(
        &self,
        activity_class: &str,
        activity_id: DbId,
    ) -> impl Future<Output = CoreResult<Vec<TargetEntity>>> + Send;
}

/// Translation of label keys into display text.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}
