//! 用户存储层
//!
//! 按 Trait 抽象存储，服务层只依赖 `UserRepositoryTrait`：
//! - `PgUserRepository`：PostgreSQL，生产环境
//! - `MemoryUserRepository`：进程内 DashMap，开发与测试

mod memory_repo;
mod traits;
mod user_repo;

pub use memory_repo::MemoryUserRepository;
pub use traits::{RepositoryError, UserRepositoryTrait};
pub use user_repo::PgUserRepository;

#[cfg(test)]
pub use traits::MockUserRepositoryTrait;
