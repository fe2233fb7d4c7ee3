//! Favorite Repository
//!
//! 관심종목 관련 데이터베이스 연산을 담당합니다.
//! `favorite_stock` 테이블은 (user_id, symbol)에 UNIQUE 제약을 걸어
//! 중복 등록을 DB 수준에서 차단합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// 관심종목 레코드
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct FavoriteRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub symbol: String,
    pub created_at: DateTime<Utc>,
}

/// Favorite Repository
pub struct FavoriteRepository;

impl FavoriteRepository {
    /// 사용자의 모든 관심종목 조회
    pub async fn get_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<FavoriteRecord>, sqlx::Error> {
        let records = sqlx::query_as::<_, FavoriteRecord>(
            r#"
            SELECT id, user_id, symbol, created_at
            FROM favorite_stock
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// 관심종목 추가
    ///
    /// 동일 (user_id, symbol) 조합이 이미 있으면 unique violation으로
    /// 실패합니다. 핸들러가 이를 409로 변환합니다.
    pub async fn add(
        pool: &PgPool,
        user_id: Uuid,
        symbol: &str,
    ) -> Result<FavoriteRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, FavoriteRecord>(
            r#"
            INSERT INTO favorite_stock (user_id, symbol)
            VALUES ($1, $2)
            RETURNING id, user_id, symbol, created_at
            "#,
        )
        .bind(user_id)
        .bind(symbol)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// 관심종목 삭제
    ///
    /// 실제로 삭제된 행이 있으면 true를 반환합니다.
    pub async fn remove(
        pool: &PgPool,
        user_id: Uuid,
        symbol: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM favorite_stock WHERE user_id = $1 AND symbol = $2",
        )
        .bind(user_id)
        .bind(symbol)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
