//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use jobfit_shared::config::AuthConfig;

use crate::auth::{JwtConfig, JwtManager, PasswordHasher};
use crate::error::Result;
use crate::repository::{MemoryUserRepository, UserRepositoryTrait};
use crate::service::AuthService;

/// Axum 应用共享状态
///
/// 所有字段都是 Arc，clone 只增加引用计数
#[derive(Clone)]
pub struct AppState {
    /// 注册与登录流程
    pub auth_service: Arc<AuthService>,
    /// 令牌签发与校验，角色中间件直接使用
    pub jwt: Arc<JwtManager>,
    /// 用户存储，就绪探针使用
    pub user_repo: Arc<dyn UserRepositoryTrait>,
}

impl AppState {
    /// 基于给定存储和认证配置创建应用状态
    pub fn new(user_repo: Arc<dyn UserRepositoryTrait>, auth: &AuthConfig) -> Result<Self> {
        let jwt = Arc::new(JwtManager::new(JwtConfig::from_auth_config(auth)?));
        let hasher = PasswordHasher::new(auth.bcrypt_cost);
        let auth_service = Arc::new(AuthService::new(user_repo.clone(), hasher, jwt.clone()));

        Ok(Self {
            auth_service,
            jwt,
            user_repo,
        })
    }

    /// 使用进程内存储创建应用状态，数据随进程退出丢失
    pub fn in_memory(auth: &AuthConfig) -> Result<Self> {
        Self::new(Arc::new(MemoryUserRepository::new()), auth)
    }
}
