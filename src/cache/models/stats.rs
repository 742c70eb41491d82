use serde::{Deserialize, Serialize};

/// Redis 累计统计快照
///
/// 计数器在缓存进程生命周期内单调不减，仅在缓存重启时归零。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStatsSnapshot {
    /// 累计接收的连接数
    pub total_connections_received: u64,
    /// 累计处理的命令数
    pub total_commands_processed: u64,
    /// 键空间命中次数
    pub keyspace_hits: u64,
    /// 键空间未命中次数
    pub keyspace_misses: u64,
}
