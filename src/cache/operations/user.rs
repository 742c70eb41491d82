// 用户缓存操作
// 基于 Redis 的键值缓存网关，不感知任何领域实体

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::models::CacheStatsSnapshot;
use crate::cache::operations::stats::parse_stats_info;

/// 缓存网关错误，缓存不可达或命令失败
///
/// 与"键不存在/已过期"严格区分：后者是正常的未命中，
/// 此错误表示网关本身不可用。
#[derive(Debug)]
pub struct CacheError(pub redis::RedisError);

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cache error: {}", self.0)
    }
}

impl std::error::Error for CacheError {}

impl From<redis::RedisError> for CacheError {
    fn from(e: redis::RedisError) -> Self {
        CacheError(e)
    }
}

/// 缓存网关接口
///
/// 纯键值操作加带过期时间的写入和原子自增，序列化由上层负责。
#[async_trait]
pub trait UserCache: Send + Sync {
    /// 读取键值，键不存在或已过期返回 None
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// 写入键值并设置过期时间（秒）
    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError>;

    /// 删除键，键不存在时不报错
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// 原子自增计数器，返回自增后的值
    async fn incr(&self, key: &str) -> Result<i64, CacheError>;

    /// 缓存连通性检查
    async fn ping(&self) -> Result<(), CacheError>;

    /// 读取累计统计计数器快照
    async fn stats(&self) -> Result<CacheStatsSnapshot, CacheError>;
}

/// 基于 Redis 客户端的缓存网关实现
pub struct RedisUserCache {
    client: Arc<RedisClient>,
}

impl RedisUserCache {
    /// 创建新的缓存网关实例
    pub fn new(client: Arc<RedisClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserCache for RedisUserCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(key, value, ttl_secs).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.del(key).await?;
        Ok(())
    }

    async fn incr(&self, key: &str) -> Result<i64, CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: i64 = conn.incr(key, 1).await?;
        Ok(value)
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStatsSnapshot, CacheError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let info: String = redis::cmd("INFO")
            .arg("stats")
            .query_async(&mut conn)
            .await?;
        Ok(parse_stats_info(&info))
    }
}
