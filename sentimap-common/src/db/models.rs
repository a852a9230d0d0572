//! Database row models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub session_token: String,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Row of the `queries` table
///
/// `details` holds the scorer's sub-score breakdown as a JSON string;
/// the geolocation columns are NULL when the lookup did not produce a fix.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct QueryRecord {
    pub id: i64,
    pub user_id: i64,
    pub text: String,
    pub sentiment: String,
    pub score: f64,
    pub confidence: Option<f64>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}
