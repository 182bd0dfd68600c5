pub mod search;
pub mod status;
pub mod stream;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::error::RequestError;
use crate::services::music_service::MusicService;

#[derive(Clone)]
pub struct AppState {
    pub music_service: MusicService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status::index))
        .route("/api/health", get(status::health))
        .route("/api/search", get(search::search))
        .route("/api/stream/{media_id}", get(stream::stream))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            RequestError::MissingQuery => StatusCode::BAD_REQUEST,
            RequestError::StreamNotFound => StatusCode::NOT_FOUND,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
