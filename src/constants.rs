/// User agent string for HTTP requests
pub const USER_AGENT: &str = "ASimpleStarGazer/1.0";

/// Meteosource point-forecast endpoint
pub const METEOSOURCE_API_BASE: &str = "https://api.meteosource.com/v1/forecast/point";

/// AstronomyAPI base URL
pub const ASTRONOMY_API_BASE: &str = "https://api.astronomyapi.com";

/// AstronomyAPI moon-phase studio path
pub const MOON_PHASE_PATH: &str = "/api/v2/studio/moon-phase";

/// Accept header sent to Meteosource
pub const METEOSOURCE_ACCEPT: &str = "application/geo+json";

// Fixed Meteosource query defaults
pub const FORECAST_SECTIONS: &str = "all";
pub const FORECAST_TIMEZONE: &str = "auto";
pub const FORECAST_LANGUAGE: &str = "en";
pub const FORECAST_UNITS: &str = "metric";

/// Timeout applied to the shared HTTP client, in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default expiry for cache_set, in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
