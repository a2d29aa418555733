//! 共享库
//!
//! 包含各服务共用的配置加载、错误类型、数据库连接池与可观测性基础设施。

pub mod config;
pub mod database;
pub mod error;
pub mod observability;
pub mod test_utils;
