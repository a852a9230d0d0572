//! User table helpers
//!
//! A "user" is a pseudo-session: registering a username mints a v4 UUID
//! session token that later requests present for identification.

use chrono::Utc;
use sentimap_common::db::models::User;
use sentimap_common::{Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a user with a fresh session token
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    ip_address: Option<&str>,
) -> Result<User> {
    let token = Uuid::new_v4().to_string();

    let insert = sqlx::query(
        "INSERT INTO users (username, session_token, ip_address, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(username)
    .bind(&token)
    .bind(ip_address)
    .bind(Utc::now())
    .execute(pool)
    .await;

    let result = match insert {
        Ok(result) => result,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(Error::InvalidInput(format!(
                "username '{}' is already taken",
                username
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await?;

    Ok(user)
}

/// Look up a user by session token
pub async fn get_user_by_token(pool: &SqlitePool, token: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE session_token = ?")
        .bind(token)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}
