//! Discovery of the entity types an activity type may be linked to.

use crate::error::CoreResult;
use crate::providers::{AssociationRegistry, SearchIndex};

/// A linkable entity type together with its search-index alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetType {
    pub entity_class: String,
    pub search_alias: String,
}

/// Ordered, duplicate-free set of searchable target types for one activity type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetTypeSet {
    types: Vec<TargetType>,
}

impl TargetTypeSet {
    /// Add a type unless its class is already present. Returns whether it was added.
    pub fn insert(&mut self, target: TargetType) -> bool {
        if self.contains(&target.entity_class) {
            return false;
        }
        self.types.push(target);
        true
    }

    pub fn contains(&self, entity_class: &str) -> bool {
        self.types.iter().any(|t| t.entity_class == entity_class)
    }

    /// Search aliases in set order.
    pub fn aliases(&self) -> Vec<String> {
        self.types.iter().map(|t| t.search_alias.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Resolve the searchable target types of `activity_class`.
///
/// Types without a search alias are valid association targets but cannot be
/// searched, so they are left out. An activity class the registry does not
/// know resolves to an empty set.
pub async fn resolve_target_types<R, I>(
    registry: &R,
    index: &I,
    activity_class: &str,
) -> CoreResult<TargetTypeSet>
where
    R: AssociationRegistry,
    I: SearchIndex,
{
    let mut set = TargetTypeSet::default();

    let Some(activity_class) = registry.resolve_activity_class(activity_class).await? else {
        return Ok(set);
    };

    for entity_class in registry.association_targets(&activity_class).await? {
        if set.contains(&entity_class) {
            continue;
        }
        if let Some(search_alias) = index.alias_for(&entity_class).await? {
            set.insert(TargetType {
                entity_class,
                search_alias,
            });
        }
    }

    Ok(set)
}
