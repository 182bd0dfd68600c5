use axum::Json;
use axum::extract::{Path, State};

use super::AppState;
use crate::domain::track::StreamInfo;
use crate::services::error::RequestError;

pub async fn stream(
    State(state): State<AppState>,
    Path(media_id): Path<String>,
) -> Result<Json<StreamInfo>, RequestError> {
    tracing::info!("Stream request: {media_id}");

    let info = state
        .music_service
        .resolve_stream(&media_id)
        .await
        .ok_or(RequestError::StreamNotFound)?;

    tracing::info!("Resolved stream for {info}");
    Ok(Json(info))
}
