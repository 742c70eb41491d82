// 用户存储库
// 包含用户相关的数据库操作

use async_trait::async_trait;
use sqlx::PgPool;
use std::fmt;

use crate::database::models::user::UserEntity;

/// 存储层错误
///
/// 唯一约束冲突（重复邮箱）与其他数据库错误分开表示，
/// 上层据此决定返回给调用方的错误类别。
#[derive(Debug)]
pub enum StoreError {
    /// 唯一约束冲突，携带数据库的原始错误信息
    Duplicate(String),
    /// 其他数据库错误（连接失败、语法错误等）
    Database(sqlx::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Duplicate(msg) => write!(f, "unique constraint violation: {}", msg),
            StoreError::Database(e) => write!(f, "database error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = e {
            if db.is_unique_violation() {
                return StoreError::Duplicate(db.message().to_string());
            }
        }
        StoreError::Database(e)
    }
}

/// 用户存储网关接口
///
/// 只负责数据库 CRUD，不包含任何缓存逻辑。
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 插入用户，ID 和创建时间由数据库分配
    async fn insert_user(&self, name: &str, email: &str) -> Result<UserEntity, StoreError>;

    /// 查询全部用户，按 ID 升序
    async fn list_users(&self) -> Result<Vec<UserEntity>, StoreError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: i32) -> Result<Option<UserEntity>, StoreError>;

    /// 数据库连通性检查
    async fn ping(&self) -> Result<(), StoreError>;
}

/// 基于 PostgreSQL 连接池的用户存储库实现
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// 创建新的用户存储库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 初始化 users 表结构，启动时调用一次
    pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                email VARCHAR(100) UNIQUE NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(pool)
        .await?;

        tracing::info!("Database schema initialized");
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert_user(&self, name: &str, email: &str) -> Result<UserEntity, StoreError> {
        let user = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<UserEntity>, StoreError> {
        let users = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserEntity>, StoreError> {
        let user = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
