use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    cache::RedisUserCache,
    database::PgUserStore,
    error::AppError,
    services::UserService,
};

use super::model::{CreateUserRequest, CreateUserResponse, GetUserResponse, ListUsersResponse};

/// 从应用状态构造用户服务，每个请求一个实例
fn user_service(state: &AppState) -> UserService<PgUserStore, RedisUserCache> {
    UserService::new(
        PgUserStore::new(state.pool.clone()),
        RedisUserCache::new(state.redis.clone()),
    )
}

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = user_service(&state).create_user(&req.name, &req.email).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created".to_string(),
            user_id: user.id,
            name: user.name,
            email: user.email,
        }),
    ))
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ListUsersResponse>, AppError> {
    let (users, source) = user_service(&state).list_users().await?;

    Ok(Json(ListUsersResponse {
        users,
        source,
        cache_hit: source.is_hit(),
    }))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<GetUserResponse>, AppError> {
    let (user, source) = user_service(&state).get_user(user_id).await?;

    Ok(Json(GetUserResponse {
        user,
        source,
        cache_hit: source.is_hit(),
    }))
}
