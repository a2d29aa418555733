//! 响应 DTO 定义

use serde::{Deserialize, Serialize};

use crate::models::{Role, UserClaims};
use crate::service::LoginOutcome;

/// 仅含提示信息的响应
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 登录响应
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: Role,
    /// 令牌过期时间（Unix 秒）
    pub expires_at: i64,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            access_token: outcome.token,
            role: outcome.role,
            expires_at: outcome.expires_at,
        }
    }
}

/// 看板响应
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub message: String,
    pub user: UserClaims,
}
