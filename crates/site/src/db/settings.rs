//! Shop settings storage.
//!
//! The chrome settings live in a single JSONB row under the fixed key
//! `main_config`, so the whole document is read and written as one value.

use serde_json::Value as JsonValue;
use sqlx::PgPool;

use crate::db::RepositoryError;
use crate::models::ShopSettings;

/// Fixed key of the singleton settings row.
pub const SETTINGS_KEY: &str = "main_config";

/// Get the shop settings document, if one has been saved.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored value does
/// not decode.
pub async fn get_settings(pool: &PgPool) -> Result<Option<ShopSettings>, RepositoryError> {
    let value: Option<JsonValue> = sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
        .bind(SETTINGS_KEY)
        .fetch_optional(pool)
        .await?;

    value
        .map(serde_json::from_value)
        .transpose()
        .map_err(RepositoryError::from)
}

/// Save the shop settings document, replacing any previous one.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub async fn save_settings(pool: &PgPool, settings: &ShopSettings) -> Result<(), RepositoryError> {
    let value = serde_json::to_value(settings)?;

    sqlx::query(
        "INSERT INTO settings (key, value) VALUES ($1, $2) \
         ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()",
    )
    .bind(SETTINGS_KEY)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}
