//! JWT Token 处理
//!
//! 提供 JWT Token 的签发和校验。令牌无状态，服务端不保存，
//! 过期只在校验时判断（零容差）。

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use jobfit_shared::config::{AuthConfig, DEV_JWT_SECRET};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::models::{Role, UserClaims};

/// 令牌过期或签名无效时的提示
const TOKEN_INVALID_OR_EXPIRED: &str = "Token is invalid or expired";
/// 令牌缺少身份字段时的提示
const TOKEN_MISSING_CLAIMS: &str = "Invalid token";

/// JWT 配置
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// 签名密钥
    pub secret: String,
    /// 签名算法，仅 HMAC 系列
    pub algorithm: Algorithm,
    /// Token 有效期（分钟）
    pub expires_in_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEV_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            expires_in_minutes: 60,
        }
    }
}

impl JwtConfig {
    /// 从应用配置构造
    pub fn from_auth_config(config: &AuthConfig) -> Result<Self, AuthError> {
        let algorithm = Algorithm::from_str(&config.jwt_algorithm).map_err(|e| {
            AuthError::Internal(format!("无效的签名算法 {}: {}", config.jwt_algorithm, e))
        })?;

        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(AuthError::Internal(format!(
                "签名算法 {:?} 不是对称算法",
                algorithm
            )));
        }

        Ok(Self {
            secret: config.jwt_secret.clone(),
            algorithm,
            expires_in_minutes: config.token_ttl_minutes,
        })
    }
}

/// JWT Claims（Token 载荷）
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// 用户邮箱
    pub email: String,
    /// 用户角色
    pub role: Role,
    /// 签发时间（早期签发的令牌可能缺失）
    #[serde(default)]
    pub iat: i64,
    /// 过期时间
    pub exp: i64,
}

/// 签发结果
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// 过期时间（Unix 秒）
    pub expires_at: i64,
}

/// JWT 管理器
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtManager {
    /// 创建 JWT 管理器
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// 签发 JWT Token，有效期从当前时间起算
    pub fn issue(&self, email: &str, role: Role) -> Result<IssuedToken, AuthError> {
        self.issue_at(email, role, Utc::now())
    }

    /// 以指定时间为签发时间签发 Token
    pub fn issue_at(
        &self,
        email: &str,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let exp = Duration::try_minutes(self.config.expires_in_minutes)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| {
                AuthError::Internal(format!(
                    "Token 有效期超出范围: {} 分钟",
                    self.config.expires_in_minutes
                ))
            })?;

        let claims = Claims {
            email: email.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("JWT 生成失败: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_at: exp.timestamp(),
        })
    }

    /// 验证并解析 JWT Token
    ///
    /// 签名不符、格式错误、过期、缺少 email/role 都返回 `InvalidToken`
    pub fn verify(&self, token: &str) -> Result<UserClaims, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => {
                    AuthError::InvalidToken(TOKEN_MISSING_CLAIMS.to_string())
                }
                _ => AuthError::InvalidToken(TOKEN_INVALID_OR_EXPIRED.to_string()),
            },
        )?;

        let Claims { email, role, .. } = token_data.claims;
        Ok(UserClaims { email, role })
    }

    /// 获取 Token 有效期（分钟）
    pub fn expires_in_minutes(&self) -> i64 {
        self.config.expires_in_minutes
    }
}
