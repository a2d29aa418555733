//! PostgreSQL 连接池
//!
//! 仅在 `store.backend = "postgres"` 时使用，内存存储不建立任何连接。

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};

use crate::config::DatabaseConfig;
use crate::error::Result;

/// 用户存储使用的连接池
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 按配置建立连接池，首个连接失败即返回错误
    #[instrument(skip(config), fields(max_connections = config.max_connections))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await?;

        info!("PostgreSQL pool established");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 等待借出的连接归还后关闭连接池
    pub async fn close(self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }
}
