//! 认证模块
//!
//! 提供 JWT Token 签发、校验和密码哈希功能

mod jwt;
mod password;

pub use jwt::{Claims, IssuedToken, JwtConfig, JwtManager};
pub use password::{DEFAULT_BCRYPT_COST, PasswordHasher};
