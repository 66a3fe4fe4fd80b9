use contextlink_core::entity::EntityId;
use contextlink_core::reference::EntityReference;
use contextlink_db::models::entity_record::CreateEntityRecord;
use contextlink_db::models::entity_type::CreateEntityType;
use contextlink_db::models::search::CreateSearchEntry;
use contextlink_db::repositories::{
    ActivityTargetRepo, AssociationRepo, EntityRecordRepo, EntityTypeRepo, SearchIndexRepo,
    TranslationRepo,
};
use serde_json::json;
use sqlx::PgPool;

async fn record(pool: &PgPool, class: &str, alias: &str, id: EntityId, title: &str) {
    EntityRecordRepo::upsert(
        pool,
        &CreateEntityRecord {
            entity_class: class.to_string(),
            entity_id: id.clone(),
            display_name: title.to_string(),
            fields: json!({}),
        },
    )
    .await
    .unwrap();
    SearchIndexRepo::upsert(
        pool,
        &CreateSearchEntry {
            entity_class: class.to_string(),
            search_alias: alias.to_string(),
            entity_id: id,
            title: title.to_string(),
        },
    )
    .await
    .unwrap();
}

/// Email activities linkable to contacts, users and custom tickets.
///
/// Users 1 ("Me") and 2 ("Admin") exist; email 42 is linked to contact 1,
/// ticket T-9 and user 1.
pub async fn seed_catalogue(pool: &PgPool) {
    let types = [
        CreateEntityType {
            entity_class: "Acme\\Email".into(),
            plural_alias: Some("emails".into()),
            url_alias: Some("email".into()),
            ..Default::default()
        },
        CreateEntityType {
            entity_class: "Acme\\Contact".into(),
            label: Some("acme.contact.label".into()),
            icon: Some("fa-user".into()),
            view_route: Some("/contact/view/{id}".into()),
            search_alias: Some("contact".into()),
            ..Default::default()
        },
        CreateEntityType {
            entity_class: "Acme\\User".into(),
            label: Some("acme.user.label".into()),
            search_alias: Some("user".into()),
            ..Default::default()
        },
        CreateEntityType {
            entity_class: "Extend\\Ticket".into(),
            is_custom: true,
            search_alias: Some("ticket".into()),
            ..Default::default()
        },
    ];
    for input in &types {
        EntityTypeRepo::upsert(pool, input).await.unwrap();
    }

    for (position, target) in ["Acme\\Contact", "Acme\\User", "Extend\\Ticket"]
        .into_iter()
        .enumerate()
    {
        AssociationRepo::associate(pool, "Acme\\Email", target, position as i32)
            .await
            .unwrap();
    }

    record(pool, "Acme\\Contact", "contact", EntityId::Int(1), "Ada Lovelace").await;
    record(pool, "Acme\\Contact", "contact", EntityId::Int(2), "Alan Turing").await;
    record(pool, "Acme\\User", "user", EntityId::Int(1), "Me").await;
    record(pool, "Acme\\User", "user", EntityId::Int(2), "Admin").await;
    record(pool, "Extend\\Ticket", "ticket", EntityId::from("T-9"), "Adapter broken").await;

    TranslationRepo::upsert(pool, "en", "acme.contact.label", "Contact")
        .await
        .unwrap();
    TranslationRepo::upsert(pool, "en", "acme.user.label", "User")
        .await
        .unwrap();

    for target in [
        EntityReference::new("Acme\\Contact", 1),
        EntityReference::new("Extend\\Ticket", "T-9"),
        EntityReference::new("Acme\\User", 1),
    ] {
        ActivityTargetRepo::attach(pool, "Acme\\Email", 42, &target)
            .await
            .unwrap();
    }
}
