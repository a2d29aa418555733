//! JobFit 认证服务入口
//!
//! 加载配置、初始化日志、选择用户存储并启动 HTTP 服务

use std::sync::Arc;

use anyhow::Context;
use jobfit_auth_service::repository::{
    MemoryUserRepository, PgUserRepository, UserRepositoryTrait,
};
use jobfit_auth_service::{AppState, SERVICE_NAME, routes};
use jobfit_shared::config::{AppConfig, StoreBackend};
use jobfit_shared::database::Database;
use jobfit_shared::observability;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 配置错误（如生产环境使用默认密钥）直接拒绝启动
    let config = AppConfig::load(SERVICE_NAME).context("加载配置失败")?;

    observability::init(&config.observability)?;

    info!(
        environment = %config.environment,
        "Starting {} on {}",
        SERVICE_NAME,
        config.server_addr()
    );

    let (user_repo, db): (Arc<dyn UserRepositoryTrait>, Option<Database>) =
        match config.store.backend {
            StoreBackend::Memory => {
                warn!("Using in-memory user store, accounts are lost on restart");
                (Arc::new(MemoryUserRepository::new()), None)
            }
            StoreBackend::Postgres => {
                let db = Database::connect(&config.database).await?;
                let repo = PgUserRepository::new(db.pool().clone());
                repo.ensure_schema().await.context("初始化 users 表失败")?;
                info!("PostgreSQL user store ready");
                (Arc::new(repo), Some(db))
            }
        };

    let state = AppState::new(user_repo, &config.auth)?;
    let app = routes::app(state, &config.cors);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM 或 Ctrl+C 时停止接收新连接，等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = db {
        db.close().await;
    }

    info!("Server shutdown complete");

    Ok(())
}

/// 监听关闭信号
///
/// 信号处理器注册失败时只记录错误，对应分支永不完成
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
