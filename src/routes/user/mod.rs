// 用户路由模块

pub mod handler;
pub mod model;

pub use handler::{create_user, get_user, list_users};
