use thiserror::Error;

/// Error kinds for the stargazer tools.
///
/// Every variant is caught at the tool boundary and shaped into an
/// `{"error": <message>}` payload; none propagate as MCP-level failures.
#[derive(Debug, Error)]
pub enum StarGazerError {
    /// Bad or missing coordinate/date input
    #[error("{0}")]
    Validation(String),

    /// Missing API key or credential
    #[error("{0} not found in environment variables")]
    Configuration(&'static str),

    /// Non-2xx vendor status; carries the raw response body
    #[error("HTTP {status}: {body}")]
    VendorHttp { status: u16, body: String },

    /// Connection refused, timeout, DNS failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// Undecodable or structurally unexpected vendor body
    #[error("{0}")]
    MalformedResponse(String),

    /// Cache-store or database failure
    #[error("{0}")]
    Resource(String),
}

impl StarGazerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}

impl From<reqwest::Error> for StarGazerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<redis::RedisError> for StarGazerError {
    fn from(err: redis::RedisError) -> Self {
        Self::Resource(err.to_string())
    }
}

impl From<sqlx::Error> for StarGazerError {
    fn from(err: sqlx::Error) -> Self {
        Self::Resource(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_message_names_the_variable() {
        let err = StarGazerError::Configuration("Meteosource_Api_Key");
        assert_eq!(
            err.to_string(),
            "Meteosource_Api_Key not found in environment variables"
        );
    }

    #[test]
    fn vendor_http_message_keeps_status_and_body() {
        let err = StarGazerError::VendorHttp {
            status: 503,
            body: "service unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: service unavailable");
    }
}
