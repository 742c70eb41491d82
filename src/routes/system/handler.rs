use axum::{
    extract::{Json, State},
    response::Html,
};

use crate::{
    AppState,
    cache::{RedisUserCache, UserCache, keys::page_visits_key},
    database::{PgUserStore, UserStore},
    error::AppError,
    services::{StatsReport, StatsService},
};

use super::model::{HealthResponse, ServiceStatuses};

/// 首页，列出可用端点并显示访问计数
///
/// 计数器不可用时照常渲染页面，只省略计数。
#[axum::debug_handler]
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let cache = RedisUserCache::new(state.redis.clone());
    let visits = match cache.incr(&page_visits_key()).await {
        Ok(count) => format!("<p>Page Visits: {} times</p>", count),
        Err(e) => {
            tracing::warn!("Failed to increment page visit counter: {}", e);
            "<p>Page visit counter unavailable</p>".to_string()
        }
    };

    Html(format!(
        r#"<h1>User Service: Axum + PostgreSQL + Redis</h1>
<h2>Available Endpoints:</h2>
<ul>
    <li><a href="/health">GET /health</a> - Health check</li>
    <li>POST /users - Create user</li>
    <li><a href="/users">GET /users</a> - List all users</li>
    <li>GET /users/id - Get user by ID</li>
    <li><a href="/cache-stats">GET /cache-stats</a> - Cache stats</li>
</ul>
{}"#,
        visits
    ))
}

/// 健康检查，对数据库和缓存各做一次实时连通性探测
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = match PgUserStore::new(state.pool.clone()).ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!("Store health check failed: {}", e);
            "disconnected"
        }
    };

    let cache = match RedisUserCache::new(state.redis.clone()).ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!("Cache health check failed: {}", e);
            "disconnected"
        }
    };

    Json(HealthResponse {
        status: "healthy",
        services: ServiceStatuses {
            web: "running",
            store,
            cache,
        },
    })
}

/// 缓存统计端点，返回统计服务的即时快照
#[axum::debug_handler]
pub async fn cache_stats(State(state): State<AppState>) -> Result<Json<StatsReport>, AppError> {
    let report = StatsService::new(RedisUserCache::new(state.redis.clone()))
        .snapshot()
        .await?;

    Ok(Json(report))
}
