// 用户实体
// 定义用户相关的数据库实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 用户实体，对应数据库中的 users 表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserEntity {
    /// 用户ID，由数据库自增分配
    pub id: i32,
    /// 用户名称
    pub name: String,
    /// 邮箱，数据库层面保证唯一
    pub email: String,
    /// 创建时间，由数据库默认值分配
    pub created_at: DateTime<Utc>,
}
