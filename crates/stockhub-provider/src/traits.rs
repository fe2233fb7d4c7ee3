//! 제공자 trait 정의.

use async_trait::async_trait;
use stockhub_core::{
    CanonicalMonthlySeries, CanonicalOverview, CanonicalQuote, CanonicalSummary,
};

use crate::error::ProviderResult;

/// 통합 시장 데이터 제공자 인터페이스.
///
/// 정규화 모델과 HTTP 표면은 이 trait에만 의존합니다. 제공자를
/// 교체할 때 변하는 단위는 이 trait의 구현체(오케스트레이션 +
/// 정규화 쌍)뿐입니다.
///
/// 구현체는 요청 간 공유되는 reqwest 클라이언트 외에 가변 상태를
/// 갖지 않으며, 동시 사용에 안전해야 합니다.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// 제공자 이름 반환.
    fn name(&self) -> &str;

    /// 심볼의 현재 시세 조회.
    async fn quote(&self, symbol: &str) -> ProviderResult<CanonicalQuote>;

    /// 심볼의 기업 개요 조회.
    async fn overview(&self, symbol: &str) -> ProviderResult<CanonicalOverview>;

    /// 심볼의 월간 시계열 조회.
    async fn monthly_series(&self, symbol: &str) -> ProviderResult<CanonicalMonthlySeries>;

    /// 심볼의 요약(시세 + 기업 정보 + 1년 가격 시계열) 조회.
    async fn summary(&self, symbol: &str) -> ProviderResult<CanonicalSummary>;
}
