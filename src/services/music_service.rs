use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::domain::artwork::best_thumbnail_url;
use crate::domain::credits::split_artist_title;
use crate::domain::track::{StreamInfo, Track, UNKNOWN_ARTIST, UNKNOWN_TITLE};
use crate::infrastructure::provider::{MediaProvider, RawEntry, RawFormat, RawMetadata};

static YOUTUBE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:(?:www|m|music)\.)?(?:youtube\.com/watch\?|youtube\.com/shorts/|youtu\.be/)")
        .unwrap()
});

/// Search and stream resolution on top of a `MediaProvider`.
///
/// Both operations are fail-soft: provider errors are logged and come back
/// as an empty list or `None`.
#[derive(Clone)]
pub struct MusicService {
    provider: Arc<dyn MediaProvider>,
}

impl MusicService {
    pub fn new(provider: Arc<dyn MediaProvider>) -> Self {
        Self { provider }
    }

    pub fn canonical_watch_url(media_id: &str) -> String {
        if YOUTUBE_URL_RE.is_match(media_id) {
            media_id.to_string()
        } else {
            format!("https://www.youtube.com/watch?v={media_id}")
        }
    }

    pub async fn search(&self, query: &str, max_results: i64) -> Vec<Track> {
        let entries = match self.provider.flat_search(query, max_results).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!("Search error: {e}");
                return Vec::new();
            }
        };

        entries.into_iter().filter_map(track_from_entry).collect()
    }

    pub async fn resolve_stream(&self, media_id: &str) -> Option<StreamInfo> {
        let url = Self::canonical_watch_url(media_id);

        let metadata = match self.provider.fetch_metadata(&url).await {
            Ok(Some(metadata)) => metadata,
            Ok(None) => {
                tracing::warn!("No metadata returned for {media_id}");
                return None;
            }
            Err(e) => {
                tracing::error!("Stream URL error for {media_id}: {e}");
                return None;
            }
        };

        let stream_url = select_audio_format(&metadata.formats)
            .and_then(|format| format.url.clone())
            .filter(|url| !url.is_empty());

        let Some(stream_url) = stream_url else {
            tracing::warn!(
                "No playable format for {media_id} among {} formats",
                metadata.formats.len()
            );
            return None;
        };

        Some(stream_info(stream_url, metadata, media_id))
    }
}

/// First audio-only format in provider order, else the first format at all.
pub fn select_audio_format(formats: &[RawFormat]) -> Option<&RawFormat> {
    formats
        .iter()
        .find(|format| format.is_audio_only())
        .or_else(|| formats.first())
}

fn track_from_entry(entry: RawEntry) -> Option<Track> {
    let media_id = entry.id.filter(|id| !id.is_empty())?;
    let (title, artist) = split_artist_title(entry.title.as_deref(), entry.uploader.as_deref());

    Some(Track {
        media_id,
        title,
        artist,
        duration_seconds: whole_seconds(entry.duration),
        thumbnail_url: best_thumbnail_url(&entry.thumbnails),
    })
}

// Artist comes straight from the metadata fields; no title splitting here.
fn stream_info(stream_url: String, metadata: RawMetadata, media_id: &str) -> StreamInfo {
    let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

    let artist = non_empty(metadata.artist)
        .or_else(|| non_empty(metadata.uploader))
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

    StreamInfo {
        stream_url,
        title: metadata.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        artist,
        duration_seconds: whole_seconds(metadata.duration),
        thumbnail_url: best_thumbnail_url(&metadata.thumbnails),
        media_id: media_id.to_string(),
    }
}

// Negative and NaN durations saturate to 0.
fn whole_seconds(duration: Option<f64>) -> u64 {
    duration.map_or(0, |secs| secs as u64)
}
