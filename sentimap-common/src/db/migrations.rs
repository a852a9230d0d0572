//! Database schema migrations
//!
//! Versioned schema migrations allowing seamless database upgrades without
//! manual deletion or data loss. Migration guidelines:
//!
//! 1. Never modify existing migrations - they must remain stable for users
//!    upgrading from older versions
//! 2. Always add new migrations - one migration function per schema change
//! 3. Prefer ALTER TABLE over DROP/CREATE to preserve data

use crate::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

/// Current schema version
///
/// **IMPORTANT:** Increment this when adding new migrations
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Get current schema version from database
///
/// Returns 0 if schema_version table doesn't exist or has no rows
async fn get_schema_version(pool: &SqlitePool) -> Result<i32> {
    let table_exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM sqlite_master
            WHERE type='table' AND name='schema_version'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_optional(pool)
            .await?;

    Ok(version.unwrap_or(0))
}

/// Record a schema version as applied
async fn set_schema_version(pool: &SqlitePool, version: i32) -> Result<()> {
    sqlx::query("INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?, ?)")
        .bind(version)
        .bind(Utc::now().to_rfc3339())
        .execute(pool)
        .await?;
    Ok(())
}

/// Run all pending migrations (idempotent - safe to call multiple times)
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let version = get_schema_version(pool).await?;

    if version < 1 {
        // v1 is the base schema created by init; nothing to transform
        set_schema_version(pool, 1).await?;
        info!("Database schema at version 1");
    }

    if version > CURRENT_SCHEMA_VERSION {
        info!(
            "Database schema version {} is newer than this build ({})",
            version, CURRENT_SCHEMA_VERSION
        );
    }

    Ok(())
}
