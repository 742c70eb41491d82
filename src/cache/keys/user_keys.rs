/// 用户列表缓存键
const ALL_USERS_KEY: &str = "all_users";

/// 单个用户缓存键前缀
const USER_PREFIX: &str = "user:";

/// 首页访问计数器键
const PAGE_VISITS_KEY: &str = "page_visits";

/// 用户列表缓存过期时间（秒）
pub const ALL_USERS_TTL_SECS: u64 = 60;

/// 单个用户缓存过期时间（秒）
pub const USER_TTL_SECS: u64 = 300;

/// 生成用户列表缓存键
pub fn all_users_key() -> String {
    ALL_USERS_KEY.to_string()
}

/// 生成单个用户缓存键
pub fn user_key(user_id: i32) -> String {
    format!("{}{}", USER_PREFIX, user_id)
}

/// 生成首页访问计数器键
pub fn page_visits_key() -> String {
    PAGE_VISITS_KEY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_key_includes_id() {
        assert_eq!(user_key(1), "user:1");
        assert_eq!(user_key(42), "user:42");
    }

    #[test]
    fn fixed_keys() {
        assert_eq!(all_users_key(), "all_users");
        assert_eq!(page_visits_key(), "page_visits");
    }
}
