use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};

use crate::constants::{
    FORECAST_LANGUAGE, FORECAST_SECTIONS, FORECAST_TIMEZONE, FORECAST_UNITS, METEOSOURCE_ACCEPT,
    METEOSOURCE_API_BASE,
};
use crate::error::StarGazerError;

/// Fetches the Meteosource point forecast and returns the vendor payload
/// verbatim.
///
/// The lat/lon strings have already been validated; they are forwarded to the
/// vendor untouched. One outbound request per call; responses are never
/// cached. Non-2xx statuses and transport failures map to structured errors,
/// no retries.
pub async fn fetch_forecast(
    client: &Client,
    api_key: &str,
    lat: &str,
    lon: &str,
) -> Result<serde_json::Value, StarGazerError> {
    let response = client
        .get(METEOSOURCE_API_BASE)
        .query(&forecast_query(lat, lon, api_key))
        .header(ACCEPT, METEOSOURCE_ACCEPT)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    forecast_payload(status, body)
}

/// Query parameters for the point-forecast endpoint: caller coordinate plus
/// the fixed defaults.
fn forecast_query<'a>(lat: &'a str, lon: &'a str, api_key: &'a str) -> [(&'static str, &'a str); 7] {
    [
        ("lat", lat),
        ("lon", lon),
        ("sections", FORECAST_SECTIONS),
        ("timezone", FORECAST_TIMEZONE),
        ("language", FORECAST_LANGUAGE),
        ("units", FORECAST_UNITS),
        ("key", api_key),
    ]
}

/// Maps a vendor response to the passthrough payload or a structured error;
/// non-success statuses carry the status code and the raw body.
fn forecast_payload(
    status: StatusCode,
    body: String,
) -> Result<serde_json::Value, StarGazerError> {
    if !status.is_success() {
        return Err(StarGazerError::VendorHttp {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        StarGazerError::malformed(format!("Error decoding JSON response from Meteosource: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_forwards_caller_coordinates_verbatim() {
        let query = forecast_query("52.520", "+45", "test-key");
        assert_eq!(query[0], ("lat", "52.520"));
        assert_eq!(query[1], ("lon", "+45"));
        assert_eq!(query[6], ("key", "test-key"));
    }

    #[test]
    fn success_passes_the_vendor_payload_through() {
        let body = r#"{"current":{"temperature":21.5},"hourly":null}"#.to_string();
        let payload = forecast_payload(StatusCode::OK, body).unwrap();
        assert_eq!(payload["current"]["temperature"], 21.5);
    }

    #[test]
    fn service_unavailable_keeps_status_and_raw_body() {
        let err = forecast_payload(
            StatusCode::SERVICE_UNAVAILABLE,
            "upstream down".to_string(),
        )
        .unwrap_err();

        match err {
            StarGazerError::VendorHttp { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream down");
            }
            other => panic!("expected VendorHttp, got: {other}"),
        }
    }

    #[test]
    fn undecodable_success_body_is_malformed() {
        let err = forecast_payload(StatusCode::OK, "<html>oops</html>".to_string()).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Error decoding JSON response from Meteosource:"));
    }
}
