use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

pub const UNKNOWN_TITLE: &str = "Unknown";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// A search hit, normalized from a flat provider entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub media_id: String,
    pub title: String,
    pub artist: String,
    pub duration_seconds: u64,
    pub thumbnail_url: String,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} [{}]", self.artist, self.title, self.media_id)
    }
}

// The mobile client reads the id under both `id` and `videoId`.
impl Serialize for Track {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Track", 6)?;
        state.serialize_field("id", &self.media_id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("artist", &self.artist)?;
        state.serialize_field("duration", &self.duration_seconds)?;
        state.serialize_field("thumbnail", &self.thumbnail_url)?;
        state.serialize_field("videoId", &self.media_id)?;
        state.end()
    }
}

/// A resolved, directly playable audio stream.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StreamInfo {
    #[serde(rename = "streamUrl")]
    pub stream_url: String,
    pub title: String,
    pub artist: String,
    #[serde(rename = "duration")]
    pub duration_seconds: u64,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    #[serde(rename = "videoId")]
    pub media_id: String,
}

impl fmt::Display for StreamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} [{}]", self.artist, self.title, self.media_id)
    }
}
