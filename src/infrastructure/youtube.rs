use std::io::ErrorKind;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;

use crate::config::Config;
use crate::infrastructure::provider::{MediaProvider, ProviderError, RawEntry, RawMetadata};

const AUDIO_FORMAT_SPEC: &str = "bestaudio/best";
const PLAYER_SKIP: &str = "webpage,configs";

const EXTRA_HEADERS: [(&str, &str); 3] = [
    ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    ("Accept-Language", "en-us,en;q=0.5"),
    ("Sec-Fetch-Mode", "navigate"),
];

#[derive(Deserialize)]
struct SearchPage {
    #[serde(default)]
    entries: Option<Vec<serde_json::Value>>,
}

/// `MediaProvider` backed by the `yt-dlp` executable.
pub struct YouTubeClient {
    binary: String,
    timeout: Option<Duration>,
    user_agent: String,
    player_clients: Vec<String>,
}

impl YouTubeClient {
    pub fn new(config: &Config) -> Self {
        Self {
            binary: config.ytdlp_path.clone(),
            timeout: config.ytdlp_timeout,
            user_agent: config.user_agent.clone(),
            player_clients: config.player_clients.clone(),
        }
    }

    /// The installed extractor version, for the startup log.
    pub async fn version(&self) -> Result<String, ProviderError> {
        let stdout = self.run(vec!["--version".to_string()]).await?;
        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }

    fn common_args(&self) -> Vec<String> {
        let mut args = vec![
            "--no-warnings".to_string(),
            "--no-check-certificates".to_string(),
            "--user-agent".to_string(),
            self.user_agent.clone(),
        ];

        for (name, value) in EXTRA_HEADERS {
            args.push("--add-header".to_string());
            args.push(format!("{name}:{value}"));
        }

        if !self.player_clients.is_empty() {
            args.push("--extractor-args".to_string());
            args.push(format!(
                "youtube:player_client={};player_skip={PLAYER_SKIP}",
                self.player_clients.join(",")
            ));
        }

        args
    }

    fn search_args(&self, query: &str, limit: i64) -> Vec<String> {
        let mut args = vec!["-J".to_string(), "--flat-playlist".to_string()];
        args.extend(self.common_args());
        args.push("--".to_string());
        args.push(format!("ytsearch{limit}:{query}"));
        args
    }

    fn metadata_args(&self, url: &str) -> Vec<String> {
        let mut args = vec![
            "-J".to_string(),
            "--no-playlist".to_string(),
            "-f".to_string(),
            AUDIO_FORMAT_SPEC.to_string(),
        ];
        args.extend(self.common_args());
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }

    async fn run(&self, args: Vec<String>) -> Result<Vec<u8>, ProviderError> {
        let output = Command::new(&self.binary)
            .args(&args)
            .kill_on_drop(true)
            .output();

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, output)
                .await
                .map_err(|_| ProviderError::Timeout(limit.as_secs()))?,
            None => output.await,
        };

        let output = output.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProviderError::NotInstalled(self.binary.clone()),
            _ => ProviderError::Spawn(e),
        })?;

        if !output.status.success() {
            return Err(ProviderError::Failed {
                status: output.status.to_string(),
                stderr: last_error_line(&output.stderr),
            });
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl MediaProvider for YouTubeClient {
    async fn flat_search(&self, query: &str, limit: i64) -> Result<Vec<RawEntry>, ProviderError> {
        let stdout = self.run(self.search_args(query, limit)).await?;
        parse_search_output(&stdout)
    }

    async fn fetch_metadata(&self, url: &str) -> Result<Option<RawMetadata>, ProviderError> {
        let stdout = self.run(self.metadata_args(url)).await?;
        parse_metadata_output(&stdout)
    }
}

/// Entries that are null or do not match the expected shape are dropped
/// individually; the rest of the page survives.
fn parse_search_output(stdout: &[u8]) -> Result<Vec<RawEntry>, ProviderError> {
    if stdout.trim_ascii().is_empty() {
        return Ok(Vec::new());
    }

    let page: Option<SearchPage> = serde_json::from_slice(stdout)?;
    let entries = page.and_then(|p| p.entries).unwrap_or_default();

    Ok(entries
        .into_iter()
        .filter(|value| !value.is_null())
        .filter_map(|value| match serde_json::from_value::<RawEntry>(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping malformed search entry: {e}");
                None
            }
        })
        .collect())
}

fn parse_metadata_output(stdout: &[u8]) -> Result<Option<RawMetadata>, ProviderError> {
    if stdout.trim_ascii().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_slice(stdout)?)
}

fn last_error_line(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
        .unwrap_or("no error output")
        .to_string()
}
