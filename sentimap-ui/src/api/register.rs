//! Registration endpoint
//!
//! Registering a username creates a pseudo-session: the response carries a
//! session token the client presents on later requests.

use axum::{
    extract::{ConnectInfo, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::api::error::ApiError;
use crate::{db, AppState};

const MAX_USERNAME_LEN: usize = 150;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub username: String,
    pub session_token: String,
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let username = req.username.trim();
    if username.is_empty() {
        return Err(ApiError::InvalidInput(
            "username must not be empty".to_string(),
        ));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ApiError::InvalidInput(format!(
            "username must be at most {} characters",
            MAX_USERNAME_LEN
        )));
    }

    let ip = connect_info.map(|ConnectInfo(addr)| addr.ip().to_string());
    let user = db::create_user(&state.db, username, ip.as_deref()).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            id: user.id,
            username: user.username,
            session_token: user.session_token,
        }),
    ))
}
