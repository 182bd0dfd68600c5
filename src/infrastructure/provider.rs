use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::domain::artwork::Thumbnail;

const NO_CODEC: &str = "none";

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("extractor executable not found: {0}")]
    NotInstalled(String),
    #[error("failed to run extractor: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("extractor timed out after {0}s")]
    Timeout(u64),
    #[error("extractor exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("unreadable extractor output: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A flat search hit. Nothing beyond the shape is guaranteed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub thumbnails: Vec<Thumbnail>,
}

/// Full metadata for a single media item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub thumbnails: Vec<Thumbnail>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub formats: Vec<RawFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawFormat {
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RawFormat {
    /// Has audio and explicitly no video. A missing audio codec is not
    /// treated as "none".
    pub fn is_audio_only(&self) -> bool {
        self.acodec.as_deref() != Some(NO_CODEC) && self.vcodec.as_deref() == Some(NO_CODEC)
    }
}

/// The external extraction engine.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Flat (metadata-light) search, bounded by `limit`. The limit is passed
    /// through unvalidated.
    async fn flat_search(&self, query: &str, limit: i64) -> Result<Vec<RawEntry>, ProviderError>;

    /// Full metadata, including delivery formats, for a watch-page URL.
    async fn fetch_metadata(&self, url: &str) -> Result<Option<RawMetadata>, ProviderError>;
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
