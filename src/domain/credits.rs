use super::track::{UNKNOWN_ARTIST, UNKNOWN_TITLE};

const ARTIST_TITLE_SEPARATOR: &str = " - ";

/// Splits an "Artist - Title" upload name into `(title, artist)`.
///
/// Only the first separator counts, so "A - B - C" becomes `("B - C", "A")`.
/// Without a separator the uploader stands in as the artist. Titles that
/// merely contain " - " are split too; that is a known false positive.
pub fn split_artist_title(raw_title: Option<&str>, uploader: Option<&str>) -> (String, String) {
    let raw_title = raw_title.unwrap_or(UNKNOWN_TITLE);

    if let Some((artist, title)) = raw_title.split_once(ARTIST_TITLE_SEPARATOR) {
        return (title.trim().to_string(), artist.trim().to_string());
    }

    let artist = uploader
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_ARTIST);

    (raw_title.to_string(), artist.to_string())
}
