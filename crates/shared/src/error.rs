//! 统一错误处理模块
//!
//! 定义共享基础设施（配置加载、数据库连接）的错误类型。

use thiserror::Error;

/// 基础设施错误类型
#[derive(Debug, Error)]
pub enum SharedError {
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, SharedError>;
