// 用户服务
// 协调数据库与缓存的读写：读取时缓存优先，写入后定向失效

use serde::Serialize;

use crate::cache::UserCache;
use crate::cache::keys::{ALL_USERS_TTL_SECS, USER_TTL_SECS, all_users_key, user_key};
use crate::database::{StoreError, UserEntity, UserStore};
use crate::error::AppError;

/// 数据来源标记，随读取结果一并返回给调用方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheSource {
    Cache,
    Store,
}

impl CacheSource {
    /// 是否命中缓存
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheSource::Cache)
    }
}

/// 用户服务
///
/// 数据库是唯一的权威数据源，缓存只是带过期时间、
/// 写入时显式失效的加速层。
pub struct UserService<S, C> {
    store: S,
    cache: C,
}

impl<S: UserStore, C: UserCache> UserService<S, C> {
    /// 创建新的用户服务实例
    pub fn new(store: S, cache: C) -> Self {
        Self { store, cache }
    }

    /// 查询全部用户，按 ID 升序
    ///
    /// 先查 `all_users` 缓存；未命中时从数据库读取并回填，
    /// 过期时间 60 秒。缓存不可达时直接降级到数据库。
    pub async fn list_users(&self) -> Result<(Vec<UserEntity>, CacheSource), AppError> {
        let key = all_users_key();

        match self.cache.get(&key).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<UserEntity>>(&json) {
                Ok(users) => {
                    tracing::debug!("Cache hit for {}", key);
                    return Ok((users, CacheSource::Cache));
                }
                Err(e) => {
                    // 损坏的缓存条目按未命中处理，下次回填时覆盖
                    tracing::warn!("Discarding corrupt cache entry {}: {}", key, e);
                }
            },
            Ok(None) => {
                tracing::debug!("Cache miss for {}", key);
            }
            Err(e) => {
                tracing::warn!("Cache unavailable, falling back to store: {}", e);
            }
        }

        let users = self.store.list_users().await?;
        self.populate(&key, &users, ALL_USERS_TTL_SECS).await;

        Ok((users, CacheSource::Store))
    }

    /// 根据 ID 查询单个用户
    ///
    /// 先查 `user:{id}` 缓存；未命中时从数据库读取并回填，
    /// 过期时间 300 秒。用户不存在时返回 NotFound，不缓存空结果。
    pub async fn get_user(&self, id: i32) -> Result<(UserEntity, CacheSource), AppError> {
        let key = user_key(id);

        match self.cache.get(&key).await {
            Ok(Some(json)) => match serde_json::from_str::<UserEntity>(&json) {
                Ok(user) => {
                    tracing::debug!("Cache hit for {}", key);
                    return Ok((user, CacheSource::Cache));
                }
                Err(e) => {
                    tracing::warn!("Discarding corrupt cache entry {}: {}", key, e);
                }
            },
            Ok(None) => {
                tracing::debug!("Cache miss for {}", key);
            }
            Err(e) => {
                tracing::warn!("Cache unavailable, falling back to store: {}", e);
            }
        }

        let user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;
        self.populate(&key, &user, USER_TTL_SECS).await;

        Ok((user, CacheSource::Store))
    }

    /// 创建用户
    ///
    /// 仅在数据库写入成功后删除 `all_users` 列表缓存；
    /// 新用户尚无单键缓存，无需失效。删除失败只记录日志，
    /// 陈旧窗口以列表缓存的 60 秒过期时间为上界。
    pub async fn create_user(&self, name: &str, email: &str) -> Result<UserEntity, AppError> {
        if name.is_empty() || email.is_empty() {
            return Err(AppError::InvalidInput("Name and email required".to_string()));
        }

        let user = match self.store.insert_user(name, email).await {
            Ok(user) => user,
            Err(StoreError::Duplicate(msg)) => {
                tracing::warn!("Insert rejected for {}: {}", email, msg);
                return Err(AppError::CreateFailed(msg));
            }
            Err(StoreError::Database(e)) => {
                return Err(AppError::StoreUnavailable(e.to_string()));
            }
        };

        let key = all_users_key();
        if let Err(e) = self.cache.delete(&key).await {
            tracing::warn!("Failed to invalidate {} after create: {}", key, e);
        }

        Ok(user)
    }

    /// 回填缓存；失败只记录日志，不影响请求结果
    async fn populate<T: Serialize>(&self, key: &str, value: &T, ttl_secs: u64) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize cache entry {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.cache.set_ex(key, &json, ttl_secs).await {
            tracing::warn!("Failed to populate cache entry {}: {}", key, e);
        }
    }
}
