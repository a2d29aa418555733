//! 中间件模块
//!
//! 提供角色访问控制与 HTTP 安全头中间件

mod role_guard;
mod security_headers;

pub use role_guard::{INSUFFICIENT_ROLE_MESSAGE, authorize, bearer_token, require_role};
pub use security_headers::security_headers;
