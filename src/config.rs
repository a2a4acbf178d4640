/// Application-level constants
pub const APP_NAME: &str = "Leafwise";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gemini REST endpoint and default model.
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Environment variable holding the API key. The key never lives in code or
/// config files.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info,leafwise=debug"
}

/// API key from the environment, empty values treated as unset.
pub fn gemini_api_key() -> Option<String> {
    std::env::var(GEMINI_API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
}
