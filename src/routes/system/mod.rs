// 系统路由模块
// 首页、健康检查和缓存统计

pub mod handler;
pub mod model;

pub use handler::{cache_stats, health, home};
