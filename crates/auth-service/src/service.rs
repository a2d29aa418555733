//! 认证业务流程
//!
//! 编排注册（唯一性检查 → 哈希 → 持久化）与登录（查找 → 校验 → 签发令牌）。
//! bcrypt 是 CPU 密集操作，放到阻塞线程池执行，避免占用异步工作线程。

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::auth::{JwtManager, PasswordHasher};
use crate::error::{AuthError, Result};
use crate::models::{NewUser, Role};
use crate::repository::UserRepositoryTrait;

/// 注册命令
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// 登录结果
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub role: Role,
    /// 令牌过期时间（Unix 秒）
    pub expires_at: i64,
}

/// 认证服务
pub struct AuthService {
    repo: Arc<dyn UserRepositoryTrait>,
    hasher: PasswordHasher,
    jwt: Arc<JwtManager>,
}

impl AuthService {
    pub fn new(
        repo: Arc<dyn UserRepositoryTrait>,
        hasher: PasswordHasher,
        jwt: Arc<JwtManager>,
    ) -> Self {
        Self { repo, hasher, jwt }
    }

    /// 用户注册
    ///
    /// 注册不签发令牌。哈希成功后持久化失败则整体失败，由调用方重新发起。
    #[instrument(skip(self, cmd), fields(email = %cmd.email, role = %cmd.role))]
    pub async fn signup(&self, cmd: SignupCommand) -> Result<()> {
        if self.repo.find_by_email(&cmd.email).await?.is_some() {
            warn!("signup rejected: email already registered");
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = self.hash_password(cmd.password).await?;

        let user = self
            .repo
            .insert(NewUser {
                name: cmd.name,
                email: cmd.email,
                password_hash,
                role: cmd.role,
            })
            .await?;

        info!(user_id = user.id, "user signed up");
        Ok(())
    }

    /// 用户登录
    ///
    /// 用户不存在与密码错误返回同一个错误，避免暴露邮箱是否已注册
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let Some(user) = self.repo.find_by_email(email).await? else {
            info!("login failed: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        let valid = self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?;
        if !valid {
            info!(user_id = user.id, "login failed: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.jwt.issue(&user.email, user.role)?;

        info!(user_id = user.id, role = %user.role, "user logged in");
        Ok(LoginOutcome {
            token: issued.token,
            role: user.role,
            expires_at: issued.expires_at,
        })
    }

    async fn hash_password(&self, password: String) -> Result<String> {
        let hasher = self.hasher;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("密码哈希任务失败: {}", e)))?
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool> {
        let hasher = self.hasher;
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::Internal(format!("密码校验任务失败: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::auth::JwtConfig;
    use crate::models::UserRecord;
    use crate::repository::{MockUserRepositoryTrait, RepositoryError};

    const COST: u32 = 4;

    fn jwt() -> Arc<JwtManager> {
        Arc::new(JwtManager::new(JwtConfig::default()))
    }

    fn service(repo: MockUserRepositoryTrait) -> AuthService {
        AuthService::new(Arc::new(repo), PasswordHasher::new(COST), jwt())
    }

    fn signup_cmd() -> SignupCommand {
        SignupCommand {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password: "pw123".to_string(),
            role: Role::JobSeeker,
        }
    }

    fn stored_user(password: &str, role: Role) -> UserRecord {
        UserRecord {
            id: 7,
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password_hash: PasswordHasher::new(COST).hash(password).unwrap(),
            role,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_signup_persists_hashed_password() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_email()
            .withf(|email| email == "a@x.com")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|user| {
                user.email == "a@x.com"
                    && user.name == "Ann"
                    && user.role == Role::JobSeeker
                    && user.password_hash != "pw123"
                    && PasswordHasher::new(COST)
                        .verify("pw123", &user.password_hash)
                        .unwrap_or(false)
            })
            .times(1)
            .returning(|user| {
                Ok(UserRecord {
                    id: 1,
                    name: user.name,
                    email: user.email,
                    password_hash: user.password_hash,
                    role: user.role,
                    created_at: Utc::now(),
                })
            });

        service(repo).signup(signup_cmd()).await.unwrap();
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_is_rejected_without_insert() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("other", Role::Recruiter))));
        repo.expect_insert().never();

        let err = service(repo).signup(signup_cmd()).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUser));
    }

    #[tokio::test]
    async fn test_signup_race_on_insert_is_duplicate() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_insert()
            .returning(|user| Err(RepositoryError::DuplicateEmail(user.email)));

        let err = service(repo).signup(signup_cmd()).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUser));
    }

    #[tokio::test]
    async fn test_signup_store_failure_propagates() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_insert()
            .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        let err = service(repo).signup(signup_cmd()).await.unwrap_err();
        assert!(matches!(err, AuthError::Database(_)));
    }

    #[tokio::test]
    async fn test_login_issues_token_with_stored_role() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(stored_user("pw123", Role::Recruiter))));

        let jwt = jwt();
        let service = AuthService::new(Arc::new(repo), PasswordHasher::new(COST), jwt.clone());
        let outcome = service.login("a@x.com", "pw123").await.unwrap();

        assert_eq!(outcome.role, Role::Recruiter);
        let claims = jwt.verify(&outcome.token).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, Role::Recruiter);
        assert!(outcome.expires_at > Utc::now().timestamp());
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_are_indistinguishable() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_email()
            .withf(|email| email == "a@x.com")
            .returning(|_| Ok(Some(stored_user("pw123", Role::JobSeeker))));
        repo.expect_find_by_email()
            .withf(|email| email == "nobody@x.com")
            .returning(|_| Ok(None));
        let service = service(repo);

        let wrong_password = service.login("a@x.com", "nope").await.unwrap_err();
        let unknown_email = service.login("nobody@x.com", "pw123").await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_with_corrupt_hash_is_internal() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_find_by_email().returning(|_| {
            let mut user = stored_user("pw123", Role::JobSeeker);
            user.password_hash = "garbage".to_string();
            Ok(Some(user))
        });

        let err = service(repo).login("a@x.com", "pw123").await.unwrap_err();
        assert!(matches!(err, AuthError::CorruptCredential(_)));
    }
}
