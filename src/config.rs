use std::env;

/// Default Tradier REST endpoint.
pub const DEFAULT_TRADIER_BASE_URL: &str = "https://api.tradier.com/v1";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tradier API token. Required to fetch market data.
    pub tradier_api_key: Option<String>,
    /// Tradier REST base URL, without trailing slash.
    pub tradier_base_url: String,
    /// Calendar days of daily history to request (400 yields ~275 trading days).
    pub history_days: i64,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tradier_api_key: None,
            tradier_base_url: DEFAULT_TRADIER_BASE_URL.to_string(),
            history_days: 400,
            request_timeout_secs: 15,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            tradier_api_key: env::var("TRADIER_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            tradier_base_url: env::var("TRADIER_BASE_URL")
                .unwrap_or(defaults.tradier_base_url),
            history_days: env::var("HISTORY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|days: &i64| *days > 0)
                .unwrap_or(defaults.history_days),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
