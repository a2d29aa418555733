//! JobFit 认证服务
//!
//! 提供用户注册、登录（签发 JWT）以及按角色限制访问的看板接口。
//!
//! - `auth`：令牌与密码哈希
//! - `repository`：用户存储抽象及 PostgreSQL/内存实现
//! - `service`：注册与登录业务流程
//! - `middleware`：角色校验与安全响应头
//! - `routes`：路由与全局中间件组装

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

pub use error::{AuthError, Result};
pub use models::{Role, UserClaims};
pub use state::AppState;

/// 服务名，用于配置加载和探针响应
pub const SERVICE_NAME: &str = "jobfit-auth-service";
