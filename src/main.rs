mod config;
mod domain;
mod infrastructure;
mod routes;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use config::Config;
use infrastructure::youtube::YouTubeClient;
use routes::AppState;
use services::music_service::MusicService;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_LOG_FILTER: &str = "mytune_backend=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let youtube = YouTubeClient::new(&config);
    match youtube.version().await {
        Ok(version) => tracing::info!("Using {} {version}", config.ytdlp_path),
        Err(e) => tracing::warn!("yt-dlp is not usable, requests will fail soft: {e}"),
    }

    let state = AppState {
        music_service: MusicService::new(Arc::new(youtube)),
    };
    let app = routes::router(state);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting MyTune Backend on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {e}");
    }
}
