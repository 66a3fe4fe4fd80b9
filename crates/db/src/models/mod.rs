pub mod activity_target;
pub mod entity_record;
pub mod entity_type;
pub mod search;
pub mod translation;
