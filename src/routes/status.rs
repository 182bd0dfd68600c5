use axum::Json;
use serde_json::{Value, json};

pub const SERVICE_NAME: &str = "MyTune Backend";

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

pub async fn index() -> Json<Value> {
    Json(json!({
        "name": format!("{SERVICE_NAME} API"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "search": "/api/search?q=query&limit=20",
            "stream": "/api/stream/<video_id>",
            "health": "/api/health",
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body, json!({ "status": "ok", "service": "MyTune Backend" }));
    }

    #[tokio::test]
    async fn index_lists_endpoints() {
        let Json(body) = index().await;
        assert_eq!(body["name"], "MyTune Backend API");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["endpoints"]["health"], "/api/health");
        assert_eq!(body["endpoints"]["stream"], "/api/stream/<video_id>");
    }
}
