//! Repository for the `translations` table.

use sqlx::PgPool;

use crate::models::translation::TranslationRow;

pub struct TranslationRepo;

impl TranslationRepo {
    pub async fn upsert(pool: &PgPool, locale: &str, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO translations (locale, key, value) VALUES ($1, $2, $3) \
             ON CONFLICT (locale, key) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(locale)
        .bind(key)
        .bind(value)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Every message of `locale`.
    pub async fn list_for_locale(pool: &PgPool, locale: &str) -> Result<Vec<TranslationRow>, sqlx::Error> {
        sqlx::query_as::<_, TranslationRow>(
            "SELECT key, value FROM translations WHERE locale = $1 ORDER BY key",
        )
        .bind(locale)
        .fetch_all(pool)
        .await
    }
}
