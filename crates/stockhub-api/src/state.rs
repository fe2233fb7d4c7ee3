//! 애플리케이션 상태 관리.
//!
//! 모든 핸들러가 공유하는 `AppState`를 정의합니다. DB 풀은 선택적이고
//! (미설정 시 시세 조회만 가능), 시장 데이터 제공자는 trait 객체로
//! 보관되어 설정만으로 교체됩니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use stockhub_provider::MarketDataProvider;

/// 애플리케이션 공유 상태.
pub struct AppState {
    /// 데이터베이스 연결 풀 (선택적)
    pub db_pool: Option<PgPool>,
    /// 활성 시장 데이터 제공자
    pub provider: Arc<dyn MarketDataProvider>,
    /// 서버 시작 시각
    pub started_at: DateTime<Utc>,
    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새 상태 생성.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            db_pool: None,
            provider,
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// DB 연결 풀 설정.
    #[must_use]
    pub fn with_db_pool(mut self, pool: PgPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// 서버 업타임 (초).
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    /// DB 연결 상태 확인.
    ///
    /// 풀이 설정되어 있고 간단한 쿼리가 성공하면 true.
    pub async fn is_db_healthy(&self) -> bool {
        match &self.db_pool {
            Some(pool) => sqlx::query("SELECT 1").fetch_one(pool).await.is_ok(),
            None => false,
        }
    }
}

/// 테스트용 상태 생성 (DB 없음, 더미 키의 Twelve Data 제공자).
#[cfg(test)]
pub fn create_test_state() -> AppState {
    use stockhub_provider::{TwelveDataConfig, TwelveDataProvider};

    let provider = TwelveDataProvider::new(TwelveDataConfig::new("test-key"))
        .expect("test provider");
    AppState::new(Arc::new(provider))
}
