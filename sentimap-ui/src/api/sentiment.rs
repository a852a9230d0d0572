//! Sentiment submission endpoint
//!
//! Runs the analysis pipeline, enriches the record with the caller's
//! geolocation where possible, and persists the result. A geolocation
//! failure is logged and recorded as "no location"; it never changes the
//! classification or fails the request.

use axum::{
    extract::{ConnectInfo, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tracing::warn;

use crate::analysis::AnalysisResult;
use crate::api::error::ApiError;
use crate::{db, AppState};

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub token: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub id: i64,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

/// POST /api/sentiment
pub async fn submit_sentiment(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Json(req): Json<SentimentRequest>,
) -> Result<Json<SentimentResponse>, ApiError> {
    let user = db::get_user_by_token(&state.db, &req.token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("invalid session token".to_string()))?;

    if req.text.trim().is_empty() {
        return Err(ApiError::InvalidInput("text must not be empty".to_string()));
    }

    let analysis = state.analyzer.analyze(&req.text)?;

    let ip = connect_info.map(|ConnectInfo(addr)| addr.ip().to_string());
    let location = match &ip {
        Some(ip) => match state.geo.locate(ip).await {
            Ok(location) => location,
            Err(e) => {
                warn!("Geolocation lookup failed for {}: {}", ip, e);
                None
            }
        },
        None => None,
    };

    let record = db::save_query(
        &state.db,
        user.id,
        &analysis,
        ip.as_deref(),
        location.as_ref(),
    )
    .await?;

    Ok(Json(SentimentResponse {
        id: record.id,
        analysis,
    }))
}
