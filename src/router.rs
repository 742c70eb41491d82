use axum::{
    Router,
    routing::get,
};

use crate::{AppState, routes};

// 创建主路由
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(routes::system::home))
        .route("/health", get(routes::system::health))
        .route("/cache-stats", get(routes::system::cache_stats))
        .route(
            "/users",
            get(routes::user::list_users).post(routes::user::create_user),
        )
        .route("/users/{user_id}", get(routes::user::get_user))
}
