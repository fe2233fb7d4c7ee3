//! User Repository
//!
//! 사용자 관련 데이터베이스 연산을 담당합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// 사용자 레코드
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// 새 사용자 입력
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct NewUser {
    pub username: String,
}

/// User Repository
pub struct UserRepository;

impl UserRepository {
    /// 모든 사용자 조회
    pub async fn get_all(pool: &PgPool) -> Result<Vec<UserRecord>, sqlx::Error> {
        let records = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, created_at FROM app_user ORDER BY created_at",
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// ID로 사용자 조회
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>, sqlx::Error> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, created_at FROM app_user WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// 사용자 생성
    ///
    /// username은 UNIQUE 제약이 있어 중복 시 unique violation으로
    /// 실패합니다.
    pub async fn create(pool: &PgPool, input: NewUser) -> Result<UserRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO app_user (username)
            VALUES ($1)
            RETURNING id, username, created_at
            "#,
        )
        .bind(&input.username)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}
