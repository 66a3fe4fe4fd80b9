//! Reference codec: the portable `{entityClass, entityId}` token.
//!
//! A token is a JSON object with exactly the keys `entityClass` and
//! `entityId`. Lists of tokens are joined with [`TOKEN_SEPARATOR`]. The
//! separator is not escaped, so a class or id containing `;` cannot be
//! carried in a list.
//!
//! Decoding is lenient by contract: it is fed editor input that may be stale
//! or hand-edited, so anything that does not name a record is dropped rather
//! than reported.

use serde::Serialize;
use serde_json::{json, Value};

use crate::entity::EntityId;

/// Delimiter between tokens in a serialized reference list.
pub const TOKEN_SEPARATOR: char = ';';

/// Portable identity of any linkable record, regardless of its type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityReference {
    #[serde(rename = "entityClass")]
    pub entity_class: String,
    #[serde(rename = "entityId")]
    pub entity_id: EntityId,
}

impl EntityReference {
    pub fn new(entity_class: impl Into<String>, entity_id: impl Into<EntityId>) -> Self {
        Self {
            entity_class: entity_class.into(),
            entity_id: entity_id.into(),
        }
    }

    /// Encode as a compact JSON object token.
    pub fn encode(&self) -> String {
        json!({
            "entityClass": self.entity_class,
            "entityId": self.entity_id,
        })
        .to_string()
    }

    /// Decode a single token.
    ///
    /// Returns `None` when the token is not a JSON object, or when either
    /// field is missing or falsy (`""`, `"0"`, `0`, `null`, `false`).
    pub fn decode(token: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(token.trim()).ok()?;
        let object = value.as_object()?;

        let entity_class = match object.get("entityClass")? {
            Value::String(s) if !s.is_empty() && s != "0" => s.clone(),
            _ => return None,
        };
        let entity_id = decode_id(object.get("entityId")?)?;

        Some(Self {
            entity_class,
            entity_id,
        })
    }
}

fn decode_id(value: &Value) -> Option<EntityId> {
    let id = match value {
        Value::String(s) => EntityId::Str(s.clone()),
        Value::Number(n) => match n.as_i64() {
            Some(i) => EntityId::Int(i),
            None => {
                let f = n.as_f64()?;
                if f.fract() != 0.0 || f < i64::MIN as f64 || f >= i64::MAX as f64 {
                    return None;
                }
                EntityId::Int(f as i64)
            }
        },
        _ => return None,
    };

    id.is_present().then_some(id)
}

/// Join the tokens of `refs` with [`TOKEN_SEPARATOR`]. An empty list encodes to `""`.
pub fn encode_list(refs: &[EntityReference]) -> String {
    refs.iter()
        .map(EntityReference::encode)
        .collect::<Vec<_>>()
        .join(&TOKEN_SEPARATOR.to_string())
}

/// Split a serialized list and decode every segment, silently skipping the
/// empty and undecodable ones.
pub fn decode_list(wire: &str) -> Vec<EntityReference> {
    wire.split(TOKEN_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .filter_map(EntityReference::decode)
        .collect()
}
