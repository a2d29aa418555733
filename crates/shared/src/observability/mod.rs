//! 统一可观测性模块
//!
//! 提供日志与请求追踪的统一初始化。
//! 所有服务通过单一入口点配置，确保一致的日志格式和字段命名。

pub mod middleware;
pub mod tracing;

use ::tracing::info;
use anyhow::Result;
use serde::Deserialize;

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// 服务名称，用于标识日志来源
    pub service_name: String,

    /// 日志级别（如 "info", "debug"），RUST_LOG 存在时以其为准
    pub log_level: String,

    /// 是否启用 JSON 格式日志
    pub json_logs: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

/// 统一初始化可观测性
///
/// # Example
///
/// ```ignore
/// use jobfit_shared::observability::{ObservabilityConfig, init};
///
/// fn main() -> anyhow::Result<()> {
///     let config = ObservabilityConfig {
///         service_name: "jobfit-auth-service".to_string(),
///         ..Default::default()
///     };
///     init(&config)?;
///     Ok(())
/// }
/// ```
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    tracing::init(config)?;

    info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Observability initialized"
    );

    Ok(())
}
