//! History and per-query deletion endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::error::ApiError;
use crate::{db, AppState};

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub text: String,
    pub sentiment: String,
    pub score: f64,
    pub confidence: Option<f64>,
    pub time: DateTime<Utc>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub username: String,
    pub queries: Vec<HistoryEntry>,
}

async fn require_user(
    state: &AppState,
    token: Option<String>,
) -> Result<sentimap_common::db::models::User, ApiError> {
    let token =
        token.ok_or_else(|| ApiError::Unauthorized("missing session token".to_string()))?;

    db::get_user_by_token(&state.db, &token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("invalid session token".to_string()))
}

/// GET /api/history?token=...
pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let user = require_user(&state, query.token).await?;

    let records = db::history_for_user(&state.db, user.id).await?;
    let queries = records
        .into_iter()
        .map(|r| HistoryEntry {
            id: r.id,
            text: r.text,
            sentiment: r.sentiment,
            score: r.score,
            confidence: r.confidence,
            time: r.created_at,
            city: r.city,
            country: r.country,
        })
        .collect();

    Ok(Json(HistoryResponse {
        username: user.username,
        queries,
    }))
}

/// DELETE /api/query/:id?token=...
///
/// Only removes the row if it belongs to the token's user.
pub async fn delete_query(
    State(state): State<AppState>,
    Path(query_id): Path<i64>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = require_user(&state, query.token).await?;

    let removed = db::delete_query(&state.db, user.id, query_id).await?;
    if removed {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::NotFound(format!("query {} not found", query_id)))
    }
}
