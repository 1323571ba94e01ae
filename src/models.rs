use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CACHE_TTL_SECS;

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    /// Latitude of the location
    pub lat: String,
    /// Longitude of the location
    pub lon: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetMoonPhaseRequest {
    /// Latitude of the location
    pub lat: String,
    /// Longitude of the location
    pub lon: String,
    /// Date in ISO format (YYYY-MM-DD)
    pub date: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CacheSetRequest {
    pub key: String,
    pub value: String,
    /// Expiry in seconds; defaults to 300
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
}

fn default_ttl() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

// ============================================================================
// AstronomyAPI Models
// ============================================================================

/// Body of the moon-phase studio POST.
#[derive(Debug, Serialize)]
pub struct MoonPhaseRequestBody {
    pub style: MoonStyle,
    pub observer: MoonObserver,
    pub view: MoonView,
}

impl MoonPhaseRequestBody {
    /// Builds the request body for an observer; the style block is cosmetic
    /// and fixed.
    pub fn for_observer(lat: &str, lon: &str, date: &str) -> Self {
        Self {
            style: MoonStyle::default(),
            observer: MoonObserver {
                latitude: lat.to_string(),
                longitude: lon.to_string(),
                date: date.to_string(),
            },
            view: MoonView::default(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonStyle {
    pub moon_style: String,
    pub background_style: String,
    pub background_color: String,
    pub heading_color: String,
    pub text_color: String,
}

impl Default for MoonStyle {
    fn default() -> Self {
        Self {
            moon_style: "default".to_string(),
            background_style: "stars".to_string(),
            background_color: "#000000".to_string(),
            heading_color: "#ffffff".to_string(),
            text_color: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MoonObserver {
    pub latitude: String,
    pub longitude: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct MoonView {
    #[serde(rename = "type")]
    pub kind: String,
    pub parameters: serde_json::Value,
}

impl Default for MoonView {
    fn default() -> Self {
        Self {
            kind: "portrait-simple".to_string(),
            parameters: serde_json::json!({}),
        }
    }
}

/// Normalized moon-phase payload returned to the caller.
///
/// Each field independently falls back to "Unknown" when the vendor omits it.
#[derive(Debug, Serialize, PartialEq)]
pub struct MoonPhaseResult {
    pub moon_phase: String,
    pub illumination: String,
    pub age: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_body_serializes_with_vendor_field_names() {
        let body = MoonPhaseRequestBody::for_observer("40.7128", "-74.0060", "2024-06-15");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["style"]["moonStyle"], "default");
        assert_eq!(json["style"]["backgroundStyle"], "stars");
        assert_eq!(json["observer"]["latitude"], "40.7128");
        assert_eq!(json["observer"]["date"], "2024-06-15");
        assert_eq!(json["view"]["type"], "portrait-simple");
        assert!(json["view"]["parameters"].as_object().unwrap().is_empty());
    }

    #[test]
    fn cache_set_ttl_defaults_to_300() {
        let request: CacheSetRequest = serde_json::from_str(r#"{"key":"k","value":"v"}"#).unwrap();
        assert_eq!(request.ttl_seconds, 300);
    }
}
