//! In-memory collaborators for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::activity_context::url_safe_class_name;
use crate::entity::{EntityId, TargetEntity};
use crate::error::{CoreError, CoreResult};
use crate::providers::{
    ActivityTargets, AssociationRegistry, EntityLookup, EntityTypeConfig, IndexHit, SearchIndex,
    TypeMetadata,
};
use crate::reference::EntityReference;
use crate::types::DbId;

#[derive(Debug, Clone)]
pub struct RecordedSearch {
    pub query: String,
    pub offset: i64,
    pub limit: i64,
    pub aliases: Vec<String>,
}

#[derive(Default)]
pub struct FakeStore {
    types: Vec<(EntityTypeConfig, Option<String>)>,
    associations: HashMap<String, Vec<String>>,
    index: Vec<(String, IndexHit)>,
    records: Vec<TargetEntity>,
    links: HashMap<(String, DbId), Vec<EntityReference>>,
    pub unavailable: bool,
    pub searches: Mutex<Vec<RecordedSearch>>,
    pub lookups: Mutex<Vec<(String, Vec<EntityId>)>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, config: EntityTypeConfig, search_alias: Option<&str>) -> Self {
        self.types.push((config, search_alias.map(str::to_string)));
        self
    }

    pub fn associate(mut self, activity_class: &str, targets: &[&str]) -> Self {
        self.associations.insert(
            activity_class.to_string(),
            targets.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn index_hit(mut self, alias: &str, entity_class: &str, id: EntityId, title: &str) -> Self {
        self.index.push((
            alias.to_string(),
            IndexHit {
                reference: EntityReference::new(entity_class, id),
                title: title.to_string(),
            },
        ));
        self
    }

    pub fn record(mut self, entity: TargetEntity) -> Self {
        self.records.push(entity);
        self
    }

    pub fn link(mut self, activity_class: &str, activity_id: DbId, target: EntityReference) -> Self {
        self.links
            .entry((activity_class.to_string(), activity_id))
            .or_default()
            .push(target);
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }

    pub fn lookup_classes(&self) -> Vec<String> {
        self.lookups
            .lock()
            .unwrap()
            .iter()
            .map(|(class, _)| class.clone())
            .collect()
    }

    fn check(&self) -> CoreResult<()> {
        if self.unavailable {
            Err(CoreError::Unavailable("fake store is down".into()))
        } else {
            Ok(())
        }
    }
}

impl SearchIndex for FakeStore {
    async fn simple_search(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
        aliases: &[String],
        _page: i64,
    ) -> CoreResult<Vec<IndexHit>> {
        self.searches.lock().unwrap().push(RecordedSearch {
            query: query.to_string(),
            offset,
            limit,
            aliases: aliases.to_vec(),
        });
        self.check()?;

        let needle = query.trim().to_lowercase();
        Ok(self
            .index
            .iter()
            .filter(|(alias, _)| aliases.contains(alias))
            .filter(|(_, hit)| needle.is_empty() || hit.title.to_lowercase().contains(&needle))
            .skip(offset as usize)
            .take(limit as usize)
            .map(|(_, hit)| hit.clone())
            .collect())
    }

    async fn alias_for(&self, entity_class: &str) -> CoreResult<Option<String>> {
        self.check()?;
        Ok(self
            .types
            .iter()
            .find(|(config, _)| config.entity_class == entity_class)
            .and_then(|(_, alias)| alias.clone()))
    }
}

impl AssociationRegistry for FakeStore {
    async fn resolve_activity_class(&self, class_or_alias: &str) -> CoreResult<Option<String>> {
        self.check()?;
        Ok(self
            .types
            .iter()
            .map(|(config, _)| &config.entity_class)
            .find(|class| {
                class.as_str() == class_or_alias || url_safe_class_name(class) == class_or_alias
            })
            .cloned())
    }

    async fn association_targets(&self, activity_class: &str) -> CoreResult<Vec<String>> {
        self.check()?;
        Ok(self
            .associations
            .get(activity_class)
            .cloned()
            .unwrap_or_default())
    }
}

impl EntityLookup for FakeStore {
    async fn find_by_ids(&self, entity_class: &str, ids: &[EntityId]) -> CoreResult<Vec<TargetEntity>> {
        self.lookups
            .lock()
            .unwrap()
            .push((entity_class.to_string(), ids.to_vec()));
        self.check()?;

        Ok(self
            .records
            .iter()
            .filter(|r| r.entity_class == entity_class && ids.iter().any(|id| id.matches(&r.id)))
            .cloned()
            .collect())
    }
}

impl TypeMetadata for FakeStore {
    async fn entity_config(&self, entity_class: &str) -> CoreResult<Option<EntityTypeConfig>> {
        self.check()?;
        Ok(self
            .types
            .iter()
            .find(|(config, _)| config.entity_class == entity_class)
            .map(|(config, _)| config.clone()))
    }
}

impl ActivityTargets for FakeStore {
    async fn activity_targets(
        &self,
        activity_class: &str,
        activity_id: DbId,
    ) -> CoreResult<Vec<TargetEntity>> {
        self.check()?;
        let Some(links) = self.links.get(&(activity_class.to_string(), activity_id)) else {
            return Ok(Vec::new());
        };

        Ok(links
            .iter()
            .filter_map(|link| {
                self.records.iter().find(|r| {
                    r.entity_class == link.entity_class && r.id.matches(&link.entity_id)
                })
            })
            .cloned()
            .collect())
    }
}

/// Type configuration with a label key and optional title fields.
pub fn labeled_type(entity_class: &str, label: &str, title_fields: &[&str]) -> EntityTypeConfig {
    EntityTypeConfig {
        entity_class: entity_class.to_string(),
        label: Some(label.to_string()),
        title_fields: if title_fields.is_empty() {
            None
        } else {
            Some(title_fields.iter().map(|f| f.to_string()).collect())
        },
        ..EntityTypeConfig::default()
    }
}
