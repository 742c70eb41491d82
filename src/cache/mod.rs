// 缓存模块
// 包含缓存键定义、数据模型和操作逻辑

pub mod keys;
pub mod models;
pub mod operations;

// 重新导出常用类型和函数，方便其他模块使用
pub use models::CacheStatsSnapshot;
pub use operations::user::{CacheError, RedisUserCache, UserCache};
