use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::constants::{ASTRONOMY_API_BASE, MOON_PHASE_PATH};
use crate::error::StarGazerError;
use crate::models::{MoonPhaseRequestBody, MoonPhaseResult};

/// Fetches and normalizes the moon phase for an observer.
///
/// The lat/lon/date strings have already been validated; they are forwarded
/// to the vendor verbatim.
pub async fn fetch_moon_phase(
    client: &Client,
    api_key: &str,
    lat: &str,
    lon: &str,
    date: &str,
) -> Result<MoonPhaseResult, StarGazerError> {
    let body = MoonPhaseRequestBody::for_observer(lat, lon, date);

    let response = client
        .post(format!("{ASTRONOMY_API_BASE}{MOON_PHASE_PATH}"))
        .header(AUTHORIZATION, format!("Basic {api_key}"))
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;

    moon_payload(status, text)
}

/// Maps a vendor response to the normalized result or a structured error;
/// non-200 statuses carry the status code and the body, with a placeholder
/// when the body is empty.
fn moon_payload(status: StatusCode, body: String) -> Result<MoonPhaseResult, StarGazerError> {
    if status != StatusCode::OK {
        let detail = if body.is_empty() {
            "No error details available".to_string()
        } else {
            body
        };
        return Err(StarGazerError::VendorHttp {
            status: status.as_u16(),
            body: detail,
        });
    }

    normalize_moon_payload(&body)
}

/// Parses the vendor body and extracts the three moon-phase fields.
///
/// The body must be JSON with a top-level "data" object; each field defaults
/// to "Unknown" when absent, so partial vendor responses still succeed.
pub fn normalize_moon_payload(body: &str) -> Result<MoonPhaseResult, StarGazerError> {
    let payload: Value = serde_json::from_str(body).map_err(|e| {
        StarGazerError::malformed(format!("Error decoding JSON response from AstronomyAPI: {e}"))
    })?;

    let data = payload
        .get("data")
        .ok_or_else(|| StarGazerError::malformed("Invalid response format from AstronomyAPI"))?;

    Ok(MoonPhaseResult {
        moon_phase: field_or_unknown(data, "moonPhase"),
        illumination: field_or_unknown(data, "illumination"),
        age: field_or_unknown(data, "age"),
    })
}

fn field_or_unknown(data: &Value, key: &str) -> String {
    match data.get(key) {
        None | Some(Value::Null) => "Unknown".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
