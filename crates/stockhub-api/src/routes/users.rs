//! 사용자 및 관심종목 endpoint.
//!
//! 관심종목은 사용자별 (user_id, symbol) 조합으로 관리됩니다.
//! 중복 등록은 DB UNIQUE 제약 위반을 409로 변환해 알립니다.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;
use stockhub_core::normalize_symbol;
use tracing::info;
use uuid::Uuid;

use crate::error::{db_error_response, db_not_configured, ApiErrorResponse, ApiResult};
use crate::repository::{FavoriteRecord, FavoriteRepository, NewUser, UserRecord, UserRepository};
use crate::state::AppState;

/// 관심종목 추가 요청.
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct AddFavoriteRequest {
    pub symbol: String,
}

fn require_pool(state: &AppState) -> Result<&PgPool, (StatusCode, Json<ApiErrorResponse>)> {
    state.db_pool.as_ref().ok_or_else(db_not_configured)
}

fn user_not_found(id: Uuid) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse::new(
            "USER_NOT_FOUND",
            format!("사용자를 찾을 수 없습니다: {}", id),
        )),
    )
}

fn favorite_not_found(symbol: &str) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse::new(
            "FAVORITE_NOT_FOUND",
            format!("등록되지 않은 관심종목입니다: {}", symbol),
        )),
    )
}

/// 관심종목 INSERT 실패를 HTTP 응답으로 변환.
///
/// UNIQUE(user_id, symbol) 제약 위반은 409, 그 외 DB 에러는 500.
fn map_favorite_add_error(
    error: sqlx::Error,
    symbol: &str,
) -> (StatusCode, Json<ApiErrorResponse>) {
    if is_unique_violation(&error) {
        (
            StatusCode::CONFLICT,
            Json(ApiErrorResponse::new(
                "DUPLICATE_FAVORITE",
                format!("이미 등록된 관심종목입니다: {}", symbol),
            )),
        )
    } else {
        db_error_response(error)
    }
}

/// 모든 사용자 조회.
/// GET /api/v1/users
pub async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<UserRecord>>> {
    let pool = require_pool(&state)?;
    let users = UserRepository::get_all(pool)
        .await
        .map_err(db_error_response)?;

    Ok(Json(users))
}

/// 사용자 생성.
/// POST /api/v1/users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewUser>,
) -> ApiResult<(StatusCode, Json<UserRecord>)> {
    let pool = require_pool(&state)?;

    if input.username.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiErrorResponse::new(
                "INVALID_USERNAME",
                "username이 비어 있습니다",
            )),
        ));
    }

    let user = UserRepository::create(pool, input).await.map_err(|e| {
        if is_unique_violation(&e) {
            (
                StatusCode::CONFLICT,
                Json(ApiErrorResponse::new(
                    "DUPLICATE_USERNAME",
                    "이미 존재하는 username입니다",
                )),
            )
        } else {
            db_error_response(e)
        }
    })?;

    info!(user_id = %user.id, "사용자 생성");
    Ok((StatusCode::CREATED, Json(user)))
}

/// 사용자의 관심종목 목록 조회.
/// GET /api/v1/users/{id}/favorites
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<FavoriteRecord>>> {
    let pool = require_pool(&state)?;

    UserRepository::get_by_id(pool, user_id)
        .await
        .map_err(db_error_response)?
        .ok_or_else(|| user_not_found(user_id))?;

    let favorites = FavoriteRepository::get_by_user(pool, user_id)
        .await
        .map_err(db_error_response)?;

    Ok(Json(favorites))
}

/// 관심종목 추가.
/// POST /api/v1/users/{id}/favorites
///
/// 이미 등록된 종목이면 409 CONFLICT를 반환합니다.
pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Json(input): Json<AddFavoriteRequest>,
) -> ApiResult<(StatusCode, Json<FavoriteRecord>)> {
    let pool = require_pool(&state)?;

    let symbol = normalize_symbol(&input.symbol);
    if symbol.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiErrorResponse::new(
                "INVALID_SYMBOL",
                "symbol이 비어 있습니다",
            )),
        ));
    }

    UserRepository::get_by_id(pool, user_id)
        .await
        .map_err(db_error_response)?
        .ok_or_else(|| user_not_found(user_id))?;

    let favorite = FavoriteRepository::add(pool, user_id, &symbol)
        .await
        .map_err(|e| map_favorite_add_error(e, &symbol))?;

    info!(%user_id, %symbol, "관심종목 추가");
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// 관심종목 삭제.
/// DELETE /api/v1/users/{id}/favorites/{symbol}
///
/// 등록되지 않은 종목이면 404를 반환합니다.
pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path((user_id, symbol)): Path<(Uuid, String)>,
) -> ApiResult<StatusCode> {
    let pool = require_pool(&state)?;
    let symbol = normalize_symbol(&symbol);

    let removed = FavoriteRepository::remove(pool, user_id, &symbol)
        .await
        .map_err(db_error_response)?;

    if !removed {
        return Err(favorite_not_found(&symbol));
    }

    info!(%user_id, %symbol, "관심종목 삭제");
    Ok(StatusCode::NO_CONTENT)
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Database(db) if db.is_unique_violation()
    )
}

/// 사용자 라우터 생성.
pub fn users_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}/favorites", get(list_favorites).post(add_favorite))
        .route("/{id}/favorites/{symbol}", delete(remove_favorite))
}
