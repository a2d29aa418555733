//! PostgreSQL 用户仓储

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use super::traits::{RepositoryError, UserRepositoryTrait};
use crate::models::{NewUser, UserRecord};

/// 用户仓储
///
/// `users.email` 上有唯一约束，并发注册同一邮箱时由数据库裁决
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 建表（幂等）
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id            BIGSERIAL PRIMARY KEY,
                name          VARCHAR(100) NOT NULL,
                email         VARCHAR(255) NOT NULL,
                password_hash VARCHAR(255) NOT NULL,
                role          VARCHAR(20)  NOT NULL,
                created_at    TIMESTAMPTZ  NOT NULL DEFAULT NOW(),
                CONSTRAINT users_email_key UNIQUE (email)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("users table ready");
        Ok(())
    }
}

#[async_trait]
impl UserRepositoryTrait for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        // 唯一约束之前遗留的重复数据按 id 取最新一条
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, RepositoryError> {
        let result = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, role, created_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(record) => Ok(record),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(RepositoryError::DuplicateEmail(user.email))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
