//! Identity and shape of linkable target records.
//!
//! Entity types are configuration-driven, so a target is a tagged value
//! (`entity_class` + [`EntityId`]) carrying its field values as JSON rather
//! than one Rust type per entity.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::reference::EntityReference;

/// Primary key of a target record. Entity types may be keyed by integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl EntityId {
    /// Parse a stored key, preferring the integer form when it round-trips exactly.
    ///
    /// `"42"` becomes `Int(42)`, while `"007"` and `"abc"` stay strings.
    pub fn from_key(key: &str) -> Self {
        match key.parse::<i64>() {
            Ok(n) if n.to_string() == key => Self::Int(n),
            _ => Self::Str(key.to_string()),
        }
    }

    /// Textual form used for storage, links, and loose comparison.
    pub fn as_key(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Str(s) => s.clone(),
        }
    }

    /// Whether two ids name the same record, treating `5` and `"5"` alike.
    pub fn matches(&self, other: &EntityId) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => self.as_key() == other.as_key(),
        }
    }

    /// Loose presence check: `0`, `""` and `"0"` do not identify a record.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Int(n) => *n != 0,
            Self::Str(s) => !s.is_empty() && s != "0",
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A hydrated target record as returned by the batched lookup collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetEntity {
    pub entity_class: String,
    pub id: EntityId,
    /// Default string representation, used when the type has no title fields.
    pub display_name: String,
    /// Field values keyed by field name.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl TargetEntity {
    pub fn new(entity_class: impl Into<String>, id: impl Into<EntityId>) -> Self {
        Self {
            entity_class: entity_class.into(),
            id: id.into(),
            display_name: String::new(),
            fields: Map::new(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    /// The portable reference naming this record.
    pub fn reference(&self) -> EntityReference {
        EntityReference::new(self.entity_class.clone(), self.id.clone())
    }

    /// Text value of a field. Missing and null fields render as `""`.
    pub fn field_text(&self, field: &str) -> String {
        match self.fields.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl fmt::Display for TargetEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// The identity on whose behalf an operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub entity_class: String,
    pub id: EntityId,
}

impl Actor {
    pub fn new(entity_class: impl Into<String>, id: impl Into<EntityId>) -> Self {
        Self {
            entity_class: entity_class.into(),
            id: id.into(),
        }
    }

    /// Whether `(entity_class, id)` names the actor's own record.
    pub fn is(&self, entity_class: &str, id: &EntityId) -> bool {
        self.entity_class == entity_class && self.id.matches(id)
    }
}
