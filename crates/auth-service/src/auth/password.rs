//! 密码处理
//!
//! 提供密码哈希和验证功能。
//!
//! bcrypt 只处理前 72 字节输入，因此明文先经 SHA-256 摘要并做 base64 编码
//! （固定 44 字节）再交给 bcrypt，任意长度的密码每个字节都参与比较。

use base64::{Engine as _, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

use crate::error::AuthError;

/// 默认 bcrypt 成本
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// 密码哈希器
///
/// 只持有成本参数，可自由复制到阻塞线程池中执行
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 对密码进行哈希处理
    ///
    /// 每次调用生成新的随机盐，同一密码两次哈希结果不同
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        bcrypt::hash(prehash(password), self.cost)
            .map_err(|e| AuthError::Internal(format!("密码哈希失败: {}", e)))
    }

    /// 验证密码
    ///
    /// 密码不匹配返回 `Ok(false)`；存储的哈希格式错误返回 `CorruptCredential`
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify(prehash(password), hash)
            .map_err(|e| AuthError::CorruptCredential(e.to_string()))
    }
}

fn prehash(password: &str) -> String {
    STANDARD.encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let password = "test_password_123";
        let hashed = hasher().hash(password).unwrap();

        assert!(hashed.starts_with("$2"));
        assert!(hasher().verify(password, &hashed).unwrap());
        assert!(!hasher().verify("wrong_password", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_gets_fresh_salt() {
        let a = hasher().hash("pw123").unwrap();
        let b = hasher().hash("pw123").unwrap();
        assert_ne!(a, b);
        assert!(hasher().verify("pw123", &a).unwrap());
        assert!(hasher().verify("pw123", &b).unwrap());
    }

    #[test]
    fn test_long_passwords_are_not_truncated() {
        let prefix = "a".repeat(100);
        let hashed = hasher().hash(&format!("{}x", prefix)).unwrap();

        assert!(hasher().verify(&format!("{}x", prefix), &hashed).unwrap());
        assert!(!hasher().verify(&format!("{}y", prefix), &hashed).unwrap());
        assert!(!hasher().verify(&prefix, &hashed).unwrap());
    }

    #[test]
    fn test_unicode_and_nul_bytes() {
        let password = "密码\0with-nul";
        let hashed = hasher().hash(password).unwrap();
        assert!(hasher().verify(password, &hashed).unwrap());
        assert!(!hasher().verify("密码", &hashed).unwrap());
    }

    #[test]
    fn test_empty_password_round_trip() {
        let hashed = hasher().hash("").unwrap();
        assert!(hasher().verify("", &hashed).unwrap());
        assert!(!hasher().verify(" ", &hashed).unwrap());
    }

    #[test]
    fn test_hash_uses_configured_cost() {
        let hashed = PasswordHasher::new(5).hash("pw").unwrap();
        assert!(hashed.contains("$05$"));
    }

    #[test]
    fn test_corrupt_hash_is_internal_error() {
        let err = hasher().verify("pw123", "not-a-bcrypt-hash").unwrap_err();
        assert!(matches!(err, AuthError::CorruptCredential(_)));
        assert!(err.is_internal());
    }
}
