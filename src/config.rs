use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// All initialization is explicit: `main` calls `Config::from_env()` once and
/// threads the values into the provider constructor. Nothing is configured as
/// a module-load side effect.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// YouTube Data API key (used for key-authenticated endpoints)
    pub youtube_api_key: String,

    /// YouTube Data API base URL
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    /// Region code used for category and most-popular chart lookups
    #[serde(default = "default_region_code")]
    pub region_code: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_youtube_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_region_code() -> String {
    "IN".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
