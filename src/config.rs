use std::env;
use std::net::IpAddr;
use std::time::Duration;

const DEFAULT_HOST: [u8; 4] = [0, 0, 0, 0];
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_YTDLP_PATH: &str = "yt-dlp";
const DEFAULT_YTDLP_TIMEOUT_SECS: u64 = 60;
const DEFAULT_PLAYER_CLIENTS: &str = "android,web";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub ytdlp_path: String,
    /// `None` leaves provider calls unbounded.
    pub ytdlp_timeout: Option<Duration>,
    pub user_agent: String,
    pub player_clients: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let host = parse_or(&var, "MYTUNE_HOST", IpAddr::from(DEFAULT_HOST))?;
        let port = parse_or(&var, "MYTUNE_PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_or(&var, "YTDLP_TIMEOUT_SECS", DEFAULT_YTDLP_TIMEOUT_SECS)?;

        let player_clients: Vec<String> = var("YTDLP_PLAYER_CLIENTS")
            .unwrap_or_else(|| DEFAULT_PLAYER_CLIENTS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|client| !client.is_empty())
            .map(ToString::to_string)
            .collect();

        Ok(Self {
            host,
            port,
            ytdlp_path: var("YTDLP_PATH").unwrap_or_else(|| DEFAULT_YTDLP_PATH.to_string()),
            ytdlp_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            user_agent: var("YTDLP_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            player_clients,
        })
    }
}

fn parse_or<T, F>(var: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}
