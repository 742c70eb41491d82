/// 缓存键模块
/// 提供各种缓存键生成函数和过期时间常量

// 用户缓存键模块
pub mod user_keys;

// 重新导出常用的键生成函数
pub use user_keys::{
    ALL_USERS_TTL_SECS, USER_TTL_SECS, all_users_key, page_visits_key, user_key,
};
