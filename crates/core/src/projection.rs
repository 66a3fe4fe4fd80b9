//! Projection of heterogeneous hits into uniform display records.

use std::collections::HashMap;

use serde::Serialize;

use crate::entity::{Actor, TargetEntity};
use crate::error::CoreResult;
use crate::providers::{EntityTypeConfig, Translator, TypeMetadata};
use crate::reference::EntityReference;

/// One selectable row as presented to the editing surface.
///
/// Serializes as `{ "id": token, "text": title }`, the shape the select
/// widget consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    #[serde(rename = "id")]
    pub token: String,
    #[serde(rename = "text")]
    pub title: String,
    #[serde(rename = "typeLabel", skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
}

/// A titled hit awaiting projection.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHit {
    pub reference: EntityReference,
    pub title: String,
    pub type_label: Option<String>,
}

/// Project one hit, or `None` when it is the actor's own record.
pub fn project(raw: &RawHit, actor: &Actor) -> Option<DisplayRecord> {
    if actor.is(&raw.reference.entity_class, &raw.reference.entity_id) {
        return None;
    }

    Some(DisplayRecord {
        token: raw.reference.encode(),
        title: labeled_title(&raw.title, raw.type_label.as_deref()),
        type_label: raw.type_label.clone(),
    })
}

/// Project every hit in order, dropping the actor's own record.
pub fn project_many(raws: &[RawHit], actor: &Actor) -> Vec<DisplayRecord> {
    raws.iter().filter_map(|raw| project(raw, actor)).collect()
}

/// `title (label)` when a label exists, otherwise `title`.
pub fn labeled_title(title: &str, type_label: Option<&str>) -> String {
    match type_label {
        Some(label) => format!("{title} ({label})"),
        None => title.to_string(),
    }
}

/// Title of a hydrated record: its title fields space-joined in configured
/// order, or its default string form when none are configured.
pub fn entity_title(entity: &TargetEntity, title_fields: Option<&[String]>) -> String {
    match title_fields {
        Some(fields) if !fields.is_empty() => fields
            .iter()
            .map(|field| entity.field_text(field))
            .collect::<Vec<_>>()
            .join(" "),
        _ => entity.to_string(),
    }
}

/// Request-scoped cache of type configuration and translated labels.
///
/// Each distinct type is looked up at most once per instance.
pub struct TypeLabels<'a, M, T> {
    metadata: &'a M,
    translator: &'a T,
    configs: HashMap<String, Option<EntityTypeConfig>>,
}

impl<'a, M, T> TypeLabels<'a, M, T>
where
    M: TypeMetadata,
    T: Translator,
{
    pub fn new(metadata: &'a M, translator: &'a T) -> Self {
        Self {
            metadata,
            translator,
            configs: HashMap::new(),
        }
    }

    /// Configuration of `entity_class`, if the type has any.
    pub async fn config(&mut self, entity_class: &str) -> CoreResult<Option<&EntityTypeConfig>> {
        if !self.configs.contains_key(entity_class) {
            let config = self.metadata.entity_config(entity_class).await?;
            self.configs.insert(entity_class.to_string(), config);
        }
        Ok(self.configs.get(entity_class).and_then(Option::as_ref))
    }

    /// Translated label of `entity_class`.
    ///
    /// `None` when the type has no configuration, no label key, or the
    /// translation is empty.
    pub async fn label(&mut self, entity_class: &str) -> CoreResult<Option<String>> {
        let translator = self.translator;
        let label = self
            .config(entity_class)
            .await?
            .and_then(EntityTypeConfig::label_key)
            .map(|key| translator.translate(key))
            .filter(|label| !label.is_empty());
        Ok(label)
    }

    /// Title of `entity` under its type's title-field configuration.
    pub async fn title(&mut self, entity: &TargetEntity) -> CoreResult<String> {
        let fields = self
            .config(&entity.entity_class)
            .await?
            .and_then(EntityTypeConfig::title_fields);
        Ok(entity_title(entity, fields))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::entity::EntityId;
    use crate::test_support::{labeled_type, FakeStore};
    use crate::translation::Catalog;

    fn hit(entity_class: &str, id: i64, title: &str, label: Option<&str>) -> RawHit {
        RawHit {
            reference: EntityReference::new(entity_class, id),
            title: title.to_string(),
            type_label: label.map(str::to_string),
        }
    }

    #[test]
    fn project_builds_token_and_labeled_title() {
        let actor = Actor::new("user", 1);
        let record = project(&hit("contact", 5, "Ada Lovelace", Some("Contact")), &actor).unwrap();

        assert_eq!(record.title, "Ada Lovelace (Contact)");
        assert_eq!(record.type_label.as_deref(), Some("Contact"));
        assert_eq!(
            EntityReference::decode(&record.token),
            Some(EntityReference::new("contact", 5))
        );
    }

    #[test]
    fn project_without_label_keeps_title() {
        let actor = Actor::new("user", 1);
        let record = project(&hit("contact", 5, "Ada", None), &actor).unwrap();
        assert_eq!(record.title, "Ada");
        assert_eq!(record.type_label, None);
    }

    #[test]
    fn actor_is_excluded_and_others_are_untouched() {
        let actor = Actor::new("user", 1);
        let raws = vec![
            hit("user", 2, "Grace", None),
            hit("user", 1, "Me", None),
            hit("contact", 1, "Same id other type", None),
        ];

        let titles: Vec<_> = project_many(&raws, &actor)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["Grace", "Same id other type"]);
    }

    #[test]
    fn display_record_serializes_for_the_select_widget() {
        let record = DisplayRecord {
            token: "{}".into(),
            title: "Ada".into(),
            type_label: None,
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "id": "{}", "text": "Ada" })
        );
    }

    #[test]
    fn entity_title_joins_fields_in_configured_order() {
        let entity = TargetEntity::new("contact", 1)
            .with_display_name("contact#1")
            .with_field("first_name", json!("Ada"))
            .with_field("last_name", json!("Lovelace"));
        let fields = vec!["last_name".to_string(), "first_name".to_string()];

        assert_eq!(entity_title(&entity, Some(&fields)), "Lovelace Ada");
    }

    #[test]
    fn entity_title_falls_back_to_display_name() {
        let entity = TargetEntity::new("contact", 1).with_display_name("contact#1");
        assert_eq!(entity_title(&entity, None), "contact#1");
        assert_eq!(entity_title(&entity, Some(&[])), "contact#1");
    }

    #[tokio::test]
    async fn labels_require_config_key_and_translation() {
        let store = FakeStore::new()
            .with_type(labeled_type("contact", "entity.contact.label", &[]), None)
            .with_type(labeled_type("lead", "", &[]), None)
            .with_type(labeled_type("task", "entity.task.label", &[]), None);
        let mut catalog = Catalog::default();
        catalog.insert("entity.contact.label", "Contact");
        catalog.insert("entity.task.label", "");

        let mut labels = TypeLabels::new(&store, &catalog);
        assert_eq!(labels.label("contact").await.unwrap().as_deref(), Some("Contact"));
        assert_eq!(labels.label("lead").await.unwrap(), None);
        assert_eq!(labels.label("task").await.unwrap(), None);
        assert_eq!(labels.label("unknown").await.unwrap(), None);
    }

    #[tokio::test]
    async fn title_uses_type_title_fields() {
        let store = FakeStore::new().with_type(
            labeled_type("contact", "entity.contact.label", &["first_name", "last_name"]),
            None,
        );
        let catalog = Catalog::default();
        let entity = TargetEntity::new("contact", EntityId::Int(3))
            .with_display_name("fallback")
            .with_field("first_name", json!("Ada"))
            .with_field("last_name", json!("Lovelace"));

        let mut labels = TypeLabels::new(&store, &catalog);
        assert_eq!(labels.title(&entity).await.unwrap(), "Ada Lovelace");
    }
}
