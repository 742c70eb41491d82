use serde::{Deserialize, Serialize};

use crate::database::UserEntity;
use crate::services::CacheSource;

// 缺失字段按空字符串处理，由服务层统一报 InvalidInput
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserEntity>,
    pub source: CacheSource,
    pub cache_hit: bool,
}

#[derive(Debug, Serialize)]
pub struct GetUserResponse {
    pub user: UserEntity,
    pub source: CacheSource,
    pub cache_hit: bool,
}
