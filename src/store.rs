use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{MySqlPool, Row};
use tokio::sync::OnceCell;

use crate::config::{Config, MysqlConfig};
use crate::error::StarGazerError;

/// Process-wide lazily-created handles to the cache store and database pool.
///
/// First use initializes the handle behind a `OnceCell`, so concurrent first
/// calls share a single initialization. A failed initialization is not
/// cached; the next call retries. There is no teardown: handles live for the
/// process lifetime.
#[derive(Default)]
pub struct SharedConnections {
    cache: OnceCell<ConnectionManager>,
    db: OnceCell<MySqlPool>,
}

impl SharedConnections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `key -> value` with the given expiry. Last write wins.
    pub async fn cache_set(
        &self,
        config: &Config,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), StarGazerError> {
        let mut conn = self.cache_handle(config).await?;
        let _: () = conn.set_ex(key, value, ttl_seconds).await?;
        Ok(())
    }

    /// Runs the liveness query and checks for the expected literal result.
    pub async fn db_ping(&self, config: &Config) -> Result<bool, StarGazerError> {
        let pool = self.db_pool(config).await?;
        let row = sqlx::query("SELECT 1").fetch_one(pool).await?;
        let value: i64 = row.try_get(0)?;
        Ok(value == 1)
    }

    async fn cache_handle(&self, config: &Config) -> Result<ConnectionManager, StarGazerError> {
        let manager = self
            .cache
            .get_or_try_init(|| async {
                tracing::info!("Connecting to cache store at {}", config.redis_url);
                let client = redis::Client::open(config.redis_url.as_str())?;
                let mut manager = ConnectionManager::new(client).await?;
                // liveness probe on first use
                let _: String = redis::cmd("PING").query_async(&mut manager).await?;
                Ok::<_, StarGazerError>(manager)
            })
            .await?;
        Ok(manager.clone())
    }

    async fn db_pool(&self, config: &Config) -> Result<&MySqlPool, StarGazerError> {
        self.db
            .get_or_try_init(|| async {
                let MysqlConfig {
                    host,
                    port,
                    database,
                    user,
                    password,
                } = &config.mysql;
                tracing::info!("Connecting to database at {host}:{port}/{database}");
                let options = MySqlConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .database(database)
                    .username(user)
                    .password(password);
                let pool = MySqlPoolOptions::new()
                    .min_connections(1)
                    .max_connections(5)
                    .connect_with(options)
                    .await?;
                Ok::<_, StarGazerError>(pool)
            })
            .await
    }
}
