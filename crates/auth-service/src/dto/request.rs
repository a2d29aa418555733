//! 请求 DTO 定义

use serde::Deserialize;
use validator::Validate;

use crate::models::Role;
use crate::service::SignupCommand;

/// 注册请求
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(
        email(message = "email is not a valid address"),
        length(max = 255, message = "email must be at most 255 characters")
    )]
    pub email: String,
    /// 长度不设上限，哈希前先做摘要
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub role: Role,
}

impl From<SignupRequest> for SignupCommand {
    fn from(req: SignupRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
        }
    }
}

/// 登录请求
///
/// 前端会额外携带 role 字段，忽略即可，角色以存储记录为准
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 255, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::JobSeeker,
        }
    }

    #[test]
    fn test_signup_validation() {
        assert!(signup("Ann", "a@x.com", "pw123").validate().is_ok());
        assert!(signup("", "a@x.com", "pw123").validate().is_err());
        assert!(signup("Ann", "not-an-email", "pw123").validate().is_err());
        assert!(signup("Ann", "a@x.com", "").validate().is_err());
    }

    #[test]
    fn test_signup_email_fits_storage_column() {
        // 64 字符本地部分 + 三段 63 字符标签，格式合法但超过 255
        let label = "a".repeat(63);
        let long = format!("{}@{}.{}.{}.com", "b".repeat(64), label, label, label);
        assert!(long.len() > 255);
        let err = signup("Ann", &long, "pw123").validate().unwrap_err();
        assert!(err.field_errors().contains_key("email"));

        let fits = format!("{}@x.com", "b".repeat(64));
        assert!(signup("Ann", &fits, "pw123").validate().is_ok());
    }

    #[test]
    fn test_long_passwords_are_accepted() {
        let password = "p".repeat(4096);
        assert!(signup("Ann", "a@x.com", &password).validate().is_ok());

        let login = LoginRequest {
            email: "a@x.com".to_string(),
            password,
        };
        assert!(login.validate().is_ok());
    }

    #[test]
    fn test_login_ignores_extra_fields() {
        let req: LoginRequest = serde_json::from_str(
            r#"{"email":"a@x.com","password":"pw123","role":"recruiter"}"#,
        )
        .unwrap();
        assert_eq!(req.email, "a@x.com");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_signup_rejects_unknown_role() {
        let result = serde_json::from_str::<SignupRequest>(
            r#"{"name":"Ann","email":"a@x.com","password":"pw","role":"admin"}"#,
        );
        assert!(result.is_err());
    }
}
