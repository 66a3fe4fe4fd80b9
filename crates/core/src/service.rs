//! Facade combining the core operations over one set of collaborators.

use serde::Serialize;

use crate::activity_context::{self, ContextItem};
use crate::context_transform::{
    in_wire_order, load_grouped, ContextTransform, KeepTitle, TitleCustomizer,
};
use crate::entity::{Actor, TargetEntity};
use crate::error::CoreResult;
use crate::projection::{project_many, DisplayRecord, RawHit, TypeLabels};
use crate::providers::{
    ActivityTargets, AssociationRegistry, EntityLookup, SearchIndex, Translator, TypeMetadata,
};
use crate::reference::decode_list;
use crate::search::search_page;
use crate::target_types::resolve_target_types;
use crate::types::DbId;

/// Response body of both search operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub results: Vec<DisplayRecord>,
    /// Whether another page exists.
    pub more: bool,
}

/// Every collaborator the service talks to, behind one bound.
pub trait ContextStore:
    SearchIndex + AssociationRegistry + EntityLookup + TypeMetadata + ActivityTargets
{
}

impl<S> ContextStore for S where
    S: SearchIndex + AssociationRegistry + EntityLookup + TypeMetadata + ActivityTargets
{
}

pub struct ContextService<S, T, H = KeepTitle> {
    store: S,
    translator: T,
    title_hook: H,
}

impl<S, T> ContextService<S, T, KeepTitle>
where
    S: ContextStore,
    T: Translator,
{
    pub fn new(store: S, translator: T) -> Self {
        Self {
            store,
            translator,
            title_hook: KeepTitle,
        }
    }
}

impl<S, T, H> ContextService<S, T, H>
where
    S: ContextStore,
    T: Translator,
    H: TitleCustomizer,
{
    /// Replace the title hook applied by [`ContextTransform::serialize`].
    pub fn with_title_hook<H2: TitleCustomizer>(self, title_hook: H2) -> ContextService<S, T, H2> {
        ContextService {
            store: self.store,
            translator: self.translator,
            title_hook,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transform(&self) -> ContextTransform<'_, S, T, H> {
        ContextTransform::new(&self.store, &self.translator, &self.title_hook)
    }

    /// Free-text search over every target type linkable to `activity_class`.
    ///
    /// The actor's own record is dropped after paging, so a page may hold
    /// fewer than `per_page` results while `more` is still set.
    pub async fn search(
        &self,
        activity_class: &str,
        query: &str,
        page: i64,
        per_page: i64,
        actor: &Actor,
    ) -> CoreResult<SearchResults> {
        let types = resolve_target_types(&self.store, &self.store, activity_class).await?;
        let page = search_page(&self.store, query, page, per_page, &types.aliases()).await?;

        let mut labels = TypeLabels::new(&self.store, &self.translator);
        let mut raws = Vec::with_capacity(page.items.len());
        for hit in page.items {
            let type_label = labels.label(&hit.reference.entity_class).await?;
            raws.push(RawHit {
                reference: hit.reference,
                title: hit.title,
                type_label,
            });
        }

        Ok(SearchResults {
            results: project_many(&raws, actor),
            more: page.has_more,
        })
    }

    /// Hydrate the references in `wire` into display records, in wire order.
    ///
    /// Malformed tokens and missing records are skipped; `more` is always false.
    pub async fn search_by_references(&self, wire: &str, actor: &Actor) -> CoreResult<SearchResults> {
        let refs = decode_list(wire);
        if refs.is_empty() {
            return Ok(SearchResults::default());
        }

        let found = load_grouped(&self.store, &refs).await?;
        let mut labels = TypeLabels::new(&self.store, &self.translator);
        let mut raws = Vec::with_capacity(refs.len());

        for entity in in_wire_order(&found, &refs) {
            raws.push(RawHit {
                reference: entity.reference(),
                title: labels.title(&entity).await?,
                type_label: labels.label(&entity.entity_class).await?,
            });
        }

        Ok(SearchResults {
            results: project_many(&raws, actor),
            more: false,
        })
    }

    /// Targets attached to one activity, optionally without the actor.
    pub async fn resolve_context(
        &self,
        activity: &str,
        activity_id: DbId,
        exclude: Option<&Actor>,
    ) -> CoreResult<Vec<ContextItem>> {
        activity_context::resolve_context(
            &self.store,
            &self.translator,
            activity,
            activity_id,
            exclude,
        )
        .await
    }
}
