use serde::Deserialize;

/// One thumbnail candidate as the provider reports it. Any field may be
/// missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub width: Option<u64>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub height: Option<u64>,
}

impl Thumbnail {
    pub fn area(&self) -> u64 {
        self.width
            .unwrap_or(0)
            .saturating_mul(self.height.unwrap_or(0))
    }
}

/// Picks the URL of the largest candidate by pixel area.
///
/// Ties go to the candidate that came first. Returns an empty string when
/// there are no candidates or the winner has no URL.
pub fn best_thumbnail_url(candidates: &[Thumbnail]) -> String {
    let mut best: Option<&Thumbnail> = None;
    for candidate in candidates {
        match best {
            Some(current) if candidate.area() <= current.area() => {}
            _ => best = Some(candidate),
        }
    }

    best.and_then(|thumb| thumb.url.clone()).unwrap_or_default()
}

// Dimensions occasionally arrive as floats; anything unusable counts as 0.
fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_u64()
            .or_else(|| v.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
    }))
}
