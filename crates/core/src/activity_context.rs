//! Listing of the targets already attached to one activity.

use serde::Serialize;

use crate::entity::{Actor, EntityId};
use crate::error::CoreResult;
use crate::projection::TypeLabels;
use crate::providers::{ActivityTargets, AssociationRegistry, EntityTypeConfig, Translator, TypeMetadata};
use crate::types::DbId;

/// Generic view route for runtime-created entity types.
const CUSTOM_ENTITY_VIEW_ROUTE: &str = "/entity/view/{class}/item/{id}";

/// One attached target, with the presentation metadata the activity view
/// needs to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextItem {
    pub title: String,
    pub activity_class_alias: String,
    /// Id of the activity the target is attached to.
    pub entity_id: DbId,
    pub target_id: EntityId,
    pub target_class_name: String,
    pub icon: Option<String>,
    pub link: Option<String>,
}

/// Class name usable inside a URL path segment.
pub fn url_safe_class_name(entity_class: &str) -> String {
    entity_class.replace('\\', "_")
}

/// Link to a target's view page, if the type has one.
pub fn view_link(config: &EntityTypeConfig, safe_class: &str, id: &EntityId) -> Option<String> {
    let id = id.as_key();
    if let Some(route) = config.view_route.as_deref().filter(|r| !r.is_empty()) {
        return Some(route.replace("{id}", &id));
    }
    if config.is_custom {
        return Some(
            CUSTOM_ENTITY_VIEW_ROUTE
                .replace("{class}", safe_class)
                .replace("{id}", &id),
        );
    }
    None
}

/// List every target attached to `(activity, activity_id)`.
///
/// `activity` may be a class name or any of its aliases; an unknown activity
/// yields an empty list. When `exclude` is given that record is left out.
pub async fn resolve_context<S, T>(
    store: &S,
    translator: &T,
    activity: &str,
    activity_id: DbId,
    exclude: Option<&Actor>,
) -> CoreResult<Vec<ContextItem>>
where
    S: AssociationRegistry + ActivityTargets + TypeMetadata,
    T: Translator,
{
    let Some(activity_class) = store.resolve_activity_class(activity).await? else {
        return Ok(Vec::new());
    };

    let activity_class_alias = store
        .entity_config(&activity_class)
        .await?
        .and_then(|config| config.plural_alias)
        .filter(|alias| !alias.is_empty())
        .unwrap_or_else(|| url_safe_class_name(&activity_class));

    let targets = store.activity_targets(&activity_class, activity_id).await?;
    let mut labels = TypeLabels::new(store, translator);
    let mut items = Vec::with_capacity(targets.len());

    for target in targets {
        if exclude.is_some_and(|actor| actor.is(&target.entity_class, &target.id)) {
            continue;
        }

        let title = labels.title(&target).await?;
        let target_class_name = url_safe_class_name(&target.entity_class);
        let (icon, link) = match labels.config(&target.entity_class).await? {
            Some(config) => (
                config.icon.clone(),
                view_link(config, &target_class_name, &target.id),
            ),
            None => (None, None),
        };

        items.push(ContextItem {
            title,
            activity_class_alias: activity_class_alias.clone(),
            entity_id: activity_id,
            target_id: target.id,
            target_class_name,
            icon,
            link,
        });
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::entity::TargetEntity;
    use crate::error::CoreError;
    use crate::reference::EntityReference;
    use crate::test_support::FakeStore;
    use crate::translation::Catalog;

    fn store() -> FakeStore {
        let mut email = EntityTypeConfig::new("Acme\\Email");
        email.plural_alias = Some("emails".into());

        let mut contact = EntityTypeConfig::new("Acme\\Contact");
        contact.icon = Some("fa-user".into());
        contact.view_route = Some("/contact/view/{id}".into());
        contact.title_fields = Some(vec!["first_name".into(), "last_name".into()]);

        let mut ticket = EntityTypeConfig::new("Extend\\Ticket");
        ticket.is_custom = true;
        ticket.icon = Some("fa-ticket".into());

        FakeStore::new()
            .with_type(email, None)
            .with_type(contact, Some("contact"))
            .with_type(ticket, Some("ticket"))
            .record(
                TargetEntity::new("Acme\\Contact", 3)
                    .with_field("first_name", json!("Ada"))
                    .with_field("last_name", json!("Lovelace")),
            )
            .record(TargetEntity::new("Extend\\Ticket", 8).with_display_name("Broken printer"))
            .record(TargetEntity::new("Acme\\User", 1).with_display_name("Me"))
            .link("Acme\\Email", 42, EntityReference::new("Acme\\Contact", 3))
            .link("Acme\\Email", 42, EntityReference::new("Extend\\Ticket", 8))
            .link("Acme\\Email", 42, EntityReference::new("Acme\\User", 1))
    }

    #[tokio::test]
    async fn lists_targets_with_presentation_metadata() {
        let store = store();
        let items = resolve_context(&store, &Catalog::default(), "Acme\\Email", 42, None)
            .await
            .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0],
            ContextItem {
                title: "Ada Lovelace".into(),
                activity_class_alias: "emails".into(),
                entity_id: 42,
                target_id: EntityId::Int(3),
                target_class_name: "Acme_Contact".into(),
                icon: Some("fa-user".into()),
                link: Some("/contact/view/3".into()),
            }
        );
        assert_eq!(
            items[1].link.as_deref(),
            Some("/entity/view/Extend_Ticket/item/8")
        );
        assert_eq!(items[2].icon, None);
        assert_eq!(items[2].link, None);
    }

    #[tokio::test]
    async fn excludes_the_actor_when_asked() {
        let store = store();
        let actor = Actor::new("Acme\\User", 1);
        let items = resolve_context(&store, &Catalog::default(), "Acme_Email", 42, Some(&actor))
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.target_class_name != "Acme_User"));
    }

    #[tokio::test]
    async fn unknown_activity_is_empty() {
        let store = store();
        let items = resolve_context(&store, &Catalog::default(), "Acme\\Call", 42, None)
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_reported() {
        let store = store().unavailable();
        assert_matches!(
            resolve_context(&store, &Catalog::default(), "Acme\\Email", 42, None).await,
            Err(CoreError::Unavailable(_))
        );
    }

    #[test]
    fn item_serializes_in_camel_case() {
        let item = ContextItem {
            title: "Acme".into(),
            activity_class_alias: "emails".into(),
            entity_id: 1,
            target_id: EntityId::Str("acme".into()),
            target_class_name: "Account".into(),
            icon: None,
            link: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["activityClassAlias"], "emails");
        assert_eq!(value["targetId"], "acme");
        assert_eq!(value["targetClassName"], "Account");
        assert!(value["link"].is_null());
    }
}
