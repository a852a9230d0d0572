//! Query table helpers
//!
//! Persists analysis results with caller metadata and optional geolocation,
//! and provides the history and map projections.

use crate::analysis::AnalysisResult;
use crate::geo::GeoLocation;
use chrono::Utc;
use sentimap_common::db::models::QueryRecord;
use sentimap_common::Result;
use serde::Serialize;
use sqlx::SqlitePool;

/// Persist one analysis result for a user
pub async fn save_query(
    pool: &SqlitePool,
    user_id: i64,
    analysis: &AnalysisResult,
    ip_address: Option<&str>,
    location: Option<&GeoLocation>,
) -> Result<QueryRecord> {
    let details = serde_json::to_string(&analysis.details).ok();

    let result = sqlx::query(
        r#"
        INSERT INTO queries
            (user_id, text, sentiment, score, confidence, details, ip_address,
             latitude, longitude, city, region, country, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(&analysis.text)
    .bind(analysis.sentiment.as_str())
    .bind(analysis.score)
    .bind(analysis.confidence)
    .bind(details)
    .bind(ip_address)
    .bind(location.map(|l| l.latitude))
    .bind(location.map(|l| l.longitude))
    .bind(location.and_then(|l| l.city.as_deref()))
    .bind(location.and_then(|l| l.region.as_deref()))
    .bind(location.and_then(|l| l.country.as_deref()))
    .bind(Utc::now())
    .execute(pool)
    .await?;

    let record = sqlx::query_as::<_, QueryRecord>("SELECT * FROM queries WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await?;

    Ok(record)
}

/// All queries for a user, newest first
pub async fn history_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<QueryRecord>> {
    let records = sqlx::query_as::<_, QueryRecord>(
        "SELECT * FROM queries WHERE user_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(records)
}

/// Delete a query if it belongs to the user; returns whether a row was removed
pub async fn delete_query(pool: &SqlitePool, user_id: i64, query_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM queries WHERE id = ? AND user_id = ?")
        .bind(query_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// One marker for the map view
#[derive(Debug, Serialize)]
pub struct MapPoint {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub sentiment: String,
    pub score: f64,
    pub city: String,
    pub country: String,
    pub text: String,
    pub uid: i64,
}

/// All queries projected to map markers, with placeholder values where the
/// geolocation lookup produced nothing
pub async fn map_points(pool: &SqlitePool) -> Result<Vec<MapPoint>> {
    let records = sqlx::query_as::<_, QueryRecord>("SELECT * FROM queries")
        .fetch_all(pool)
        .await?;

    Ok(records
        .into_iter()
        .map(|q| MapPoint {
            lat: q.latitude,
            lng: q.longitude,
            sentiment: q.sentiment,
            score: q.score,
            city: q.city.unwrap_or_else(|| "Unknown City".to_string()),
            country: q.country.unwrap_or_else(|| "Unknown Country".to_string()),
            text: q.text,
            uid: q.user_id,
        })
        .collect())
}
