//! Repository layer: one zero-sized struct per table group, each taking a
//! `&PgPool` per call.

pub mod activity_target_repo;
pub mod association_repo;
pub mod entity_record_repo;
pub mod entity_type_repo;
pub mod search_index_repo;
pub mod translation_repo;

pub use activity_target_repo::ActivityTargetRepo;
pub use association_repo::AssociationRepo;
pub use entity_record_repo::EntityRecordRepo;
pub use entity_type_repo::EntityTypeRepo;
pub use search_index_repo::SearchIndexRepo;
pub use translation_repo::TranslationRepo;
