//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewUser, UserRecord};

/// 存储层错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 违反邮箱唯一约束
    #[error("邮箱已存在: {0}")]
    DuplicateEmail(String),

    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

/// 用户仓储接口
///
/// 实现方必须保证同一 email 至多一条记录，冲突时 `insert` 返回 `DuplicateEmail`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// 按邮箱精确查找（区分大小写）
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 插入新用户，返回带存储分配 ID 的记录
    async fn insert(&self, user: NewUser) -> Result<UserRecord, RepositoryError>;

    /// 存储可用性检查
    async fn health_check(&self) -> Result<(), RepositoryError>;
}
