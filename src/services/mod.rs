// 服务模块
// 在存储网关和缓存网关之上实现缓存一致性策略与统计报告

pub mod stats;
pub mod user;

pub use stats::{StatsReport, StatsService};
pub use user::{CacheSource, UserService};
