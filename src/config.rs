use std::env;

/// Environment-sourced settings, read once at startup.
///
/// Every key is optional: a missing API key degrades to a structured error on
/// the tool that needs it, never a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub meteosource_api_key: Option<String>,
    pub astronomy_api_key: Option<String>,
    pub redis_url: String,
    pub mysql: MysqlConfig,
}

#[derive(Debug, Clone)]
pub struct MysqlConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            meteosource_api_key: non_empty_var("Meteosource_Api_Key"),
            astronomy_api_key: non_empty_var("AstronomyAPI_key"),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379/0".to_string()),
            mysql: MysqlConfig {
                host: env::var("MYSQL_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("MYSQL_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3306),
                database: env::var("MYSQL_DB").unwrap_or_else(|_| "stargazer".to_string()),
                user: env::var("MYSQL_USER").unwrap_or_else(|_| "sg".to_string()),
                password: env::var("MYSQL_PASSWORD").unwrap_or_else(|_| "sgpass".to_string()),
            },
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
