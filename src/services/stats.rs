// 缓存统计服务
// 从缓存网关的累计计数器推导命中率指标，自身不持有任何状态

use serde::Serialize;

use crate::cache::UserCache;
use crate::error::AppError;

/// 缓存效率指标的即时快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub total_connections: u64,
    pub total_commands: u64,
    pub keyspace_hits: u64,
    pub keyspace_misses: u64,
    /// 命中率百分比，保留两位小数
    pub hit_ratio: f64,
}

/// 统计服务
pub struct StatsService<C> {
    cache: C,
}

impl<C: UserCache> StatsService<C> {
    /// 创建新的统计服务实例
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    /// 读取缓存网关的累计计数器并计算命中率
    ///
    /// 缓存不可达时直接失败，不回退到任何历史数据。
    pub async fn snapshot(&self) -> Result<StatsReport, AppError> {
        let stats = self.cache.stats().await?;

        Ok(StatsReport {
            total_connections: stats.total_connections_received,
            total_commands: stats.total_commands_processed,
            keyspace_hits: stats.keyspace_hits,
            keyspace_misses: stats.keyspace_misses,
            hit_ratio: hit_ratio(stats.keyspace_hits, stats.keyspace_misses),
        })
    }
}

/// 命中率百分比，保留两位小数
///
/// 分母下限取 1，没有任何查询时结果为 0.0 而不是除零错误。
pub fn hit_ratio(hits: u64, misses: u64) -> f64 {
    let denominator = (hits + misses).max(1) as f64;
    (hits as f64 / denominator * 100.0 * 100.0).round() / 100.0
}
