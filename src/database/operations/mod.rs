// 数据库操作模块

pub mod user;
