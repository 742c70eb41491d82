// 缓存操作模块

pub mod stats;
pub mod user;
