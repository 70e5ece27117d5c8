/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("turkey-weather-mcp/", env!("CARGO_PKG_VERSION"));

/// OpenWeatherMap API base URL
pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Upstream request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Key values shipped in sample configs; treated the same as a missing key
pub const PLACEHOLDER_API_KEYS: &[&str] = &["YOUR_API_KEY_HERE", "your_key"];

/// Environment variables read by [`crate::config::Config::from_env`]
pub const ENV_API_KEY: &str = "OPENWEATHER_API_KEY";
pub const ENV_API_BASE: &str = "OPENWEATHER_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "OPENWEATHER_TIMEOUT_SECS";

/// Turkey has been on UTC+3 year-round since 2016
pub const TURKEY_UTC_OFFSET_SECS: i32 = 3 * 3600;

/// Label used when neither the caller nor the API names a location
pub const UNKNOWN_LOCATION: &str = "Bilinmeyen Konum";

/// Placeholder for readings missing from an upstream response
pub const NOT_AVAILABLE: &str = "N/A";

/// Footer appended to every demo report, keyed by what a real key would give
pub fn demo_disclaimer(subject: &str) -> String {
    format!(
        "⚠️ Bu demo verileri yalnızca örnek amaçlıdır. Gerçek {} için geçerli bir API anahtarı ekleyin.",
        subject
    )
}
