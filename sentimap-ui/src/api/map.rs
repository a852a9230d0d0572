//! Map data endpoint

use axum::{extract::State, Json};

use crate::api::error::ApiError;
use crate::db::{self, MapPoint};
use crate::AppState;

/// GET /api/sentiment-map
///
/// All stored queries projected to map markers. Public, like the rest of
/// the map view.
pub async fn sentiment_map(
    State(state): State<AppState>,
) -> Result<Json<Vec<MapPoint>>, ApiError> {
    Ok(Json(db::map_points(&state.db).await?))
}
