use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::provider::{MediaProvider, ProviderError, RawEntry, RawMetadata};

/// Returns fixed payloads and records what it was asked for.
#[derive(Default)]
pub struct FakeProvider {
    pub entries: Vec<RawEntry>,
    pub metadata: Option<RawMetadata>,
    pub fail: bool,
    pub calls: AtomicUsize,
    pub last_request: std::sync::Mutex<Option<String>>,
}

impl FakeProvider {
    pub fn with_entries(entries: Vec<RawEntry>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub fn with_metadata(metadata: RawMetadata) -> Self {
        Self {
            metadata: Some(metadata),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<String> {
        self.last_request.lock().unwrap().clone()
    }

    fn record(&self, request: String) -> Result<(), ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        if self.fail {
            return Err(ProviderError::Failed {
                status: "exit status: 1".to_string(),
                stderr: "ERROR: [youtube] HTTP Error 429: Too Many Requests".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MediaProvider for FakeProvider {
    async fn flat_search(&self, query: &str, limit: i64) -> Result<Vec<RawEntry>, ProviderError> {
        self.record(format!("{query}|{limit}"))?;
        Ok(self.entries.clone())
    }

    async fn fetch_metadata(&self, url: &str) -> Result<Option<RawMetadata>, ProviderError> {
        self.record(url.to_string())?;
        Ok(self.metadata.clone())
    }
}

pub fn entry(id: Option<&str>, title: Option<&str>, uploader: Option<&str>) -> RawEntry {
    RawEntry {
        id: id.map(str::to_string),
        title: title.map(str::to_string),
        uploader: uploader.map(str::to_string),
        ..Default::default()
    }
}
