// 缓存数据模型模块

pub mod stats;

pub use stats::CacheStatsSnapshot;
