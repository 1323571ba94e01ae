use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde_json::{json, Value};

use crate::config::Config;
use crate::constants::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::StarGazerError;
use crate::models::{CacheSetRequest, GetMoonPhaseRequest, GetWeatherRequest, MoonPhaseResult};
use crate::store::SharedConnections;
use crate::validation::{parse_coordinate, validate_date};
use crate::{moon, weather};

/// Main stargazer service that handles MCP requests
#[derive(Clone)]
pub struct StarGazer {
    client: Arc<Client>,
    config: Arc<Config>,
    connections: Arc<SharedConnections>,
    tool_router: ToolRouter<Self>,
}

impl StarGazer {
    /// Creates a new service instance configured from the environment
    pub fn new() -> Result<Self> {
        Self::with_config(Config::from_env())
    }

    fn with_config(config: Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
            connections: Arc::new(SharedConnections::new()),
            tool_router: Self::tool_router(),
        })
    }

    /// Key check, validation, then one outbound Meteosource request
    async fn weather_payload(&self, request: &GetWeatherRequest) -> Result<Value, StarGazerError> {
        let api_key = self
            .config
            .meteosource_api_key
            .as_deref()
            .ok_or(StarGazerError::Configuration("Meteosource_Api_Key"))?;

        parse_coordinate(&request.lat, &request.lon)?;

        weather::fetch_forecast(&self.client, api_key, &request.lat, &request.lon).await
    }

    /// Key check, validation, then one outbound AstronomyAPI request
    async fn moon_phase(
        &self,
        request: &GetMoonPhaseRequest,
    ) -> Result<MoonPhaseResult, StarGazerError> {
        let api_key = self
            .config
            .astronomy_api_key
            .as_deref()
            .ok_or(StarGazerError::Configuration("AstronomyAPI_key"))?;

        parse_coordinate(&request.lat, &request.lon)?;
        validate_date(&request.date)?;

        moon::fetch_moon_phase(&self.client, api_key, &request.lat, &request.lon, &request.date)
            .await
    }
}

/// Shapes a JSON payload into the single-text-content result every tool
/// returns; domain failures never surface as MCP-level errors.
fn json_result(payload: Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        payload.to_string(),
    )]))
}

fn error_payload(err: &StarGazerError) -> Value {
    json!({ "error": err.to_string() })
}

#[tool_handler]
impl ServerHandler for StarGazer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-stargazer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A stargazing companion service. Provides Meteosource point forecasts and \
                AstronomyAPI moon phases for a coordinate, plus cache and database helpers."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl StarGazer {
    /// Fetches the Meteosource forecast and passes the vendor payload through
    #[tool(description = "Get weather information for a specific location. Provide latitude and longitude as decimal strings (e.g., lat: '52.52', lon: '13.41' for Berlin).")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting weather for coordinates: {}, {}",
            request.lat,
            request.lon
        );

        let payload = match self.weather_payload(&request).await {
            Ok(forecast) => forecast,
            Err(e) => error_payload(&e),
        };

        json_result(payload)
    }

    /// Fetches and normalizes the moon phase for a date and location
    #[tool(description = "Get the moon phase for a specific date and location. Provide latitude and longitude as decimal strings and the date in ISO format (YYYY-MM-DD).")]
    async fn get_moon_phase(
        &self,
        Parameters(request): Parameters<GetMoonPhaseRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting moon phase for coordinates: {}, {} on {}",
            request.lat,
            request.lon,
            request.date
        );

        let payload = match self.moon_phase(&request).await {
            Ok(result) => json!({
                "moon_phase": result.moon_phase,
                "illumination": result.illumination,
                "age": result.age,
            }),
            Err(e) => error_payload(&e),
        };

        json_result(payload)
    }

    /// Writes a value into the cache store with an expiry
    #[tool(description = "Set a value into the cache store with an optional TTL in seconds (default 300).")]
    async fn cache_set(
        &self,
        Parameters(request): Parameters<CacheSetRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Caching key: {}", request.key);

        let payload = match self
            .connections
            .cache_set(&self.config, &request.key, &request.value, request.ttl_seconds)
            .await
        {
            Ok(()) => json!({ "ok": true }),
            Err(e) => json!({ "error": format!("cache_set failed: {e}") }),
        };

        json_result(payload)
    }

    /// Runs the database liveness query
    #[tool(description = "Ping the database by running a trivial liveness query.")]
    async fn db_ping(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Pinging database");

        let payload = match self.connections.db_ping(&self.config).await {
            Ok(result) => json!({ "result": result }),
            Err(e) => json!({ "error": format!("db_ping failed: {e}") }),
        };

        json_result(payload)
    }
}
