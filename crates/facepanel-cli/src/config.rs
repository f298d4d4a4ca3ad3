//! CLI configuration, loaded from environment variables.

/// Default base URL of the face service API.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

pub struct Config {
    /// Base URL of the face service API.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from `FACEPANEL_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("FACEPANEL_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout_secs: env_u64("FACEPANEL_TIMEOUT_SECS", 10),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
