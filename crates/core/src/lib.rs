//! Polymorphic target resolution for activity context.
//!
//! An activity (email, call, task, ...) can be linked to records of many
//! unrelated entity types. This crate finds candidate targets through a
//! shared full-text index, projects them into uniform display records, and
//! converts the editing surface's wire string to and from live records.
//!
//! Storage, search and translation are reached through the traits in
//! [`providers`]; the crate itself performs no I/O.

pub mod activity_context;
pub mod context_transform;
pub mod entity;
pub mod error;
pub mod projection;
pub mod providers;
pub mod reference;
pub mod search;
pub mod service;
pub mod target_types;
pub mod translation;
pub mod types;

#[cfg(test)]
mod test_support;
