// 数据库实体模块

pub mod user;
