// 路由模块

pub mod system;
pub mod user;
