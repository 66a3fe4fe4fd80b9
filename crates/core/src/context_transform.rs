//! Bidirectional mapping between live targets and the stored wire string.
//!
//! Read path: targets are rendered as `;`-joined `{"text", "id"}` objects for
//! the select widget. Write path: a wire string of reference tokens is
//! turned back into live records with one batched lookup per entity class.

use indexmap::IndexMap;
use serde_json::json;

use crate::entity::{Actor, EntityId, TargetEntity};
use crate::error::CoreResult;
use crate::projection::{labeled_title, TypeLabels};
use crate::providers::{EntityLookup, Translator, TypeMetadata};
use crate::reference::{decode_list, EntityReference, TOKEN_SEPARATOR};

/// The `{title, targetId}` pair offered to a [`TitleCustomizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextTitle {
    pub title: String,
    pub target_id: EntityId,
}

/// Extension point that may rewrite a target's display title before it is
/// serialized. Invoked once per serialized target.
pub trait TitleCustomizer: Send + Sync {
    fn customize(&self, item: ContextTitle, entity_class: &str) -> ContextTitle;
}

/// Leaves titles unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepTitle;

impl TitleCustomizer for KeepTitle {
    fn customize(&self, item: ContextTitle, _entity_class: &str) -> ContextTitle {
        item
    }
}

impl<F> TitleCustomizer for F
where
    F: Fn(ContextTitle, &str) -> ContextTitle + Send + Sync,
{
    fn customize(&self, item: ContextTitle, entity_class: &str) -> ContextTitle {
        self(item, entity_class)
    }
}

/// Group references by entity class in encounter order, dropping repeated ids.
pub fn group_by_class(refs: &[EntityReference]) -> IndexMap<String, Vec<EntityId>> {
    let mut groups: IndexMap<String, Vec<EntityId>> = IndexMap::new();
    for reference in refs {
        let ids = groups.entry(reference.entity_class.clone()).or_default();
        if !ids.iter().any(|id| id.matches(&reference.entity_id)) {
            ids.push(reference.entity_id.clone());
        }
    }
    groups
}

/// Load the records named by `refs`, issuing exactly one lookup per distinct
/// entity class. References to missing records are omitted.
pub async fn load_grouped<L: EntityLookup>(
    lookup: &L,
    refs: &[EntityReference],
) -> CoreResult<Vec<TargetEntity>> {
    let mut found = Vec::new();
    for (entity_class, ids) in group_by_class(refs) {
        found.extend(lookup.find_by_ids(&entity_class, &ids).await?);
    }
    Ok(found)
}

/// Arrange `found` in the order of `refs`, one entry per reference whose
/// record was found.
pub fn in_wire_order(found: &[TargetEntity], refs: &[EntityReference]) -> Vec<TargetEntity> {
    refs.iter()
        .filter_map(|reference| {
            found.iter().find(|entity| {
                entity.entity_class == reference.entity_class
                    && entity.id.matches(&reference.entity_id)
            })
        })
        .cloned()
        .collect()
}

/// Serializer/deserializer used by the editing surface.
pub struct ContextTransform<'a, S, T, H> {
    store: &'a S,
    translator: &'a T,
    title_hook: &'a H,
}

impl<'a, S, T, H> ContextTransform<'a, S, T, H>
where
    S: EntityLookup + TypeMetadata,
    T: Translator,
    H: TitleCustomizer,
{
    pub fn new(store: &'a S, translator: &'a T, title_hook: &'a H) -> Self {
        Self {
            store,
            translator,
            title_hook,
        }
    }

    /// Render `targets` (minus the actor) as the wire string shown by the
    /// select widget, in input order.
    pub async fn serialize(&self, targets: &[TargetEntity], actor: &Actor) -> CoreResult<String> {
        let mut labels = TypeLabels::new(self.store, self.translator);
        let mut items = Vec::with_capacity(targets.len());

        for target in targets {
            if actor.is(&target.entity_class, &target.id) {
                continue;
            }

            let title = labeled_title(
                &labels.title(target).await?,
                labels.label(&target.entity_class).await?.as_deref(),
            );
            let item = self.title_hook.customize(
                ContextTitle {
                    title,
                    target_id: target.id.clone(),
                },
                &target.entity_class,
            );

            items.push(
                json!({
                    "text": item.title,
                    "id": target.reference().encode(),
                })
                .to_string(),
            );
        }

        Ok(items.join(&TOKEN_SEPARATOR.to_string()))
    }

    /// Turn a wire string of reference tokens into live records.
    ///
    /// Classes are processed in first-encounter order; within a class the
    /// lookup's own order is kept.
    pub async fn deserialize(&self, wire: &str) -> CoreResult<Vec<TargetEntity>> {
        if wire.trim().is_empty() {
            return Ok(Vec::new());
        }
        load_grouped(self.store, &decode_list(wire)).await
    }

    /// Re-render a stored wire string for the select widget.
    ///
    /// Unlike [`deserialize`](Self::deserialize), records come back in the
    /// order their references were stored.
    pub async fn render(&self, wire: &str, actor: &Actor) -> CoreResult<String> {
        let refs = decode_list(wire);
        let found = load_grouped(self.store, &refs).await?;
        self.serialize(&in_wire_order(&found, &refs), actor).await
    }
}
