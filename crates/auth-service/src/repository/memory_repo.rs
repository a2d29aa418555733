//! 内存用户仓储
//!
//! 使用 DashMap 实现的并发安全存储，适用于测试和开发环境，进程退出即丢失。

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::traits::{RepositoryError, UserRepositoryTrait};
use crate::models::{NewUser, UserRecord};

/// 内存用户仓储
///
/// 以 email 为键，插入走 entry API，检查与写入在同一分片锁内完成
#[derive(Debug)]
pub struct MemoryUserRepository {
    users: DashMap<String, UserRecord>,
    next_id: AtomicI64,
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// 当前用户数
    pub fn count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl UserRepositoryTrait for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self.users.get(email).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, RepositoryError> {
        match self.users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::DuplicateEmail(user.email)),
            Entry::Vacant(slot) => {
                let record = UserRecord {
                    id: self.next_id.fetch_add(1, Ordering::SeqCst),
                    name: user.name,
                    email: user.email,
                    password_hash: user.password_hash,
                    role: user.role,
                    created_at: Utc::now(),
                };
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
