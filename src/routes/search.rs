use axum::Json;
use axum::extract::{Query, State};
use serde::Serialize;

use super::AppState;
use crate::domain::track::Track;
use crate::services::error::RequestError;

pub const DEFAULT_LIMIT: i64 = 20;

/// Repeated keys keep their first value, so `?q=a&q=b` searches for "a".
#[derive(Debug, Default)]
pub struct SearchParams {
    q: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    results: Vec<Track>,
    count: usize,
}

impl SearchParams {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Absent or non-numeric limits fall back to the default. Integers go to
    /// the provider as-is; ones beyond `i64` saturate.
    fn limit(&self) -> i64 {
        let Some(raw) = self.limit.as_deref().map(str::trim) else {
            return DEFAULT_LIMIT;
        };
        if let Ok(limit) = raw.parse() {
            return limit;
        }

        let (negative, digits) = match raw.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return DEFAULT_LIMIT;
        }
        if negative { i64::MIN } else { i64::MAX }
    }
}

pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, RequestError> {
    let params = SearchParams::from_pairs(pairs);
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(RequestError::MissingQuery)?;
    let limit = params.limit();

    tracing::info!("Search request: {query} (limit {limit})");

    let results = state.music_service.search(query, limit).await;
    tracing::info!("Search for {query} returned {} tracks", results.len());
    for track in &results {
        tracing::debug!("Search hit: {track}");
    }

    Ok(Json(SearchResponse {
        count: results.len(),
        results,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::infrastructure::fake::{FakeProvider, entry};
    use crate::routes::test_support::{json_body, state};

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn params(q: Option<&str>, limit: Option<&str>) -> Query<Vec<(String, String)>> {
        let mut items = Vec::new();
        if let Some(q) = q {
            items.push(("q", q));
        }
        if let Some(limit) = limit {
            items.push(("limit", limit));
        }
        Query(pairs(&items))
    }

    fn limit_of(raw: Option<&str>) -> i64 {
        let Query(items) = params(None, raw);
        SearchParams::from_pairs(items).limit()
    }

    #[test]
    fn limit_defaults_and_passes_through() {
        assert_eq!(limit_of(None), 20);
        assert_eq!(limit_of(Some("abc")), 20);
        assert_eq!(limit_of(Some("")), 20);
        assert_eq!(limit_of(Some("-")), 20);
        assert_eq!(limit_of(Some("5")), 5);
        assert_eq!(limit_of(Some("-1")), -1);
        assert_eq!(limit_of(Some("100000")), 100000);
    }

    #[test]
    fn oversized_limits_saturate_instead_of_defaulting() {
        assert_eq!(limit_of(Some("99999999999999999999")), i64::MAX);
        assert_eq!(limit_of(Some("+99999999999999999999")), i64::MAX);
        assert_eq!(limit_of(Some("-99999999999999999999")), i64::MIN);
    }

    #[test]
    fn repeated_keys_keep_the_first_value() {
        let params = SearchParams::from_pairs(pairs(&[
            ("q", "hello"),
            ("limit", "1"),
            ("q", "world"),
            ("limit", "2"),
            ("other", "ignored"),
        ]));
        assert_eq!(params.q.as_deref(), Some("hello"));
        assert_eq!(params.limit(), 1);
    }

    #[tokio::test]
    async fn returns_results_and_count() {
        let (state, provider) = state(FakeProvider::with_entries(vec![
            entry(Some("a1"), Some("Artist - Song"), None),
            entry(None, Some("dropped"), None),
        ]));

        let (status, body) = json_body(search(State(state), params(Some("  song "), Some("7"))).await).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(provider.last_request().as_deref(), Some("song|7"));
        assert_eq!(
            body,
            json!({
                "results": [{
                    "id": "a1",
                    "title": "Song",
                    "artist": "Artist",
                    "duration": 0,
                    "thumbnail": "",
                    "videoId": "a1",
                }],
                "count": 1,
            })
        );
    }

    #[tokio::test]
    async fn missing_or_blank_query_is_rejected() {
        for q in [None, Some(""), Some("   ")] {
            let (state, provider) = state(FakeProvider::default());
            let result = search(State(state), params(q, None)).await;
            assert_eq!(result.err(), Some(RequestError::MissingQuery));
            assert_eq!(provider.calls(), 0);
        }
    }

    #[tokio::test]
    async fn provider_failure_is_an_empty_page() {
        let (state, _) = state(FakeProvider::failing());
        let (status, body) = json_body(search(State(state), params(Some("x"), None)).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "results": [], "count": 0 }));
    }
}
