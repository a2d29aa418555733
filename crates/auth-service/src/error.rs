//! 认证服务错误类型定义
//!
//! 客户端错误的 Display 输出直接作为响应体的 detail 字段返回；
//! 系统级错误只返回通用提示，详细原因写入日志。

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::repository::RepositoryError;

/// 登录失败的统一提示，用户不存在与密码错误共用
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// 认证服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    // 客户端错误
    #[error("User already exists")]
    DuplicateUser,
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("{0}")]
    InvalidToken(String),
    #[error("{0}")]
    Forbidden(String),

    // 系统错误
    #[error("存储的密码哈希已损坏: {0}")]
    CorruptCredential(String),
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl AuthError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateUser | Self::InvalidCredentials | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::CorruptCredential(_) | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateUser => "DUPLICATE_USER",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::CorruptCredential(_) => "CORRUPT_CREDENTIAL",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 是否为服务端故障
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match &self {
            Self::CorruptCredential(e) => {
                tracing::error!(error = %e, "stored password hash is corrupt");
                "Internal server error".to_string()
            }
            Self::Database(e) => {
                tracing::error!(error = %e, "database operation failed");
                "Internal server error".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "detail": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for AuthError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// 请求体无法解析（JSON 格式错误、未知角色等）
impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// 从存储层错误转换
///
/// 唯一约束冲突即并发注册同一邮箱，按重复用户处理
impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateEmail(_) => Self::DuplicateUser,
            RepositoryError::Database(e) => Self::Database(e),
        }
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, AuthError>;
