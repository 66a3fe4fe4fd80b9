use serde::Serialize;
use sqlx::FromRow;

/// A row from the `translations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TranslationRow {
    pub key: String,
    pub value: String,
}
