//! 用户与令牌相关的领域模型
//!
//! 所有枚举都支持数据库（sqlx）和 JSON（serde）序列化

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 用户角色
///
/// 访问控制按字符串精确匹配，角色之间没有层级关系
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum Role {
    /// 求职者
    JobSeeker,
    /// 招聘方
    Recruiter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobSeeker => "jobseeker",
            Self::Recruiter => "recruiter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jobseeker" => Ok(Self::JobSeeker),
            "recruiter" => Ok(Self::Recruiter),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// 已持久化的用户记录
///
/// 注册后不再修改；email 区分大小写，按存储原样比较
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// 待插入的用户
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// 通过校验的令牌身份信息，交给受保护的处理器使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub email: String,
    pub role: Role,
}
