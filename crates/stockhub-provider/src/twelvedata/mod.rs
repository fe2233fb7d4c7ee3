//! Twelve Data 제공자.
//!
//! <https://twelvedata.com> REST API 커넥터와 정규화 구현.
//!
//! # 호출 구성
//!
//! - 시세: `/quote` 단일 호출
//! - 기업 개요: `/profile` + `/statistics` 두 호출 (statistics는
//!   실패해도 개요 전체를 실패시키지 않음)
//! - 월간 시계열: `/time_series?interval=1month` 단일 호출
//! - 요약: `/quote` + `/profile` + `/time_series` 세 호출 동시 발행

mod models;
mod normalize;

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use stockhub_core::{
    CanonicalMonthlySeries, CanonicalOverview, CanonicalQuote, CanonicalSummary,
    MarketDataConfig,
};
use tracing::{debug, warn};

use crate::error::{ProviderError, ProviderResult};
use crate::traits::MarketDataProvider;

use models::{TdProfile, TdQuote, TdStatistics, TdTimeSeries};

/// 기본 API URL.
const DEFAULT_BASE_URL: &str = "https://api.twelvedata.com";

/// 요약 합성 시 요청하는 월간 포인트 수.
const SUMMARY_OUTPUT_SIZE: u32 = 15;

// ============================================================================
// 설정
// ============================================================================

/// Twelve Data 클라이언트 설정.
///
/// # 보안
/// - `Debug` 구현은 `api_key`를 마스킹합니다.
#[derive(Clone)]
pub struct TwelveDataConfig {
    /// API 키
    pub api_key: String,
    /// 기본 URL (테스트 시 재정의 가능)
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl fmt::Debug for TwelveDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwelveDataConfig")
            .field("api_key", &"***REDACTED***")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl TwelveDataConfig {
    /// 새 설정 생성.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// 기본 URL 재정의.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 공통 시장 데이터 설정에서 생성.
    pub fn from_market_data(config: &MarketDataConfig) -> Self {
        let mut this = Self::new(config.api_key.clone());
        if let Some(base_url) = &config.base_url {
            this.base_url = base_url.clone();
        }
        this.timeout_secs = config.timeout_secs;
        this
    }
}

// ============================================================================
// 클라이언트
// ============================================================================

/// Twelve Data 제공자 구현.
pub struct TwelveDataProvider {
    config: TwelveDataConfig,
    client: Client,
}

impl TwelveDataProvider {
    /// 새 제공자 생성.
    ///
    /// # Errors
    /// HTTP 클라이언트 생성에 실패하면 `ProviderError::Config`를 반환합니다.
    pub fn new(config: TwelveDataConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::Config(format!("HTTP 클라이언트 생성 실패: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// 공개 GET 요청 후 역직렬화.
    async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        symbol: &str,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> ProviderResult<T> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        let query: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();

        debug!("GET {} ({} {})", endpoint, operation, symbol);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ProviderError::Network {
                operation,
                symbol: symbol.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ProviderError::Network {
            operation,
            symbol: symbol.to_string(),
            message: e.to_string(),
        })?;

        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))
    }

    async fn fetch_quote(&self, symbol: &str) -> ProviderResult<TdQuote> {
        self.get(
            "quote",
            symbol,
            "/quote",
            &[
                ("symbol", symbol.to_string()),
                ("apikey", self.config.api_key.clone()),
            ],
        )
        .await
    }

    async fn fetch_profile(&self, symbol: &str) -> ProviderResult<TdProfile> {
        self.get(
            "profile",
            symbol,
            "/profile",
            &[
                ("symbol", symbol.to_string()),
                ("apikey", self.config.api_key.clone()),
            ],
        )
        .await
    }

    async fn fetch_statistics(&self, symbol: &str) -> ProviderResult<TdStatistics> {
        self.get(
            "statistics",
            symbol,
            "/statistics",
            &[
                ("symbol", symbol.to_string()),
                ("apikey", self.config.api_key.clone()),
            ],
        )
        .await
    }

    async fn fetch_time_series(
        &self,
        symbol: &str,
        output_size: Option<u32>,
    ) -> ProviderResult<TdTimeSeries> {
        let mut params = vec![
            ("symbol", symbol.to_string()),
            ("interval", "1month".to_string()),
            ("apikey", self.config.api_key.clone()),
        ];
        if let Some(size) = output_size {
            params.push(("outputsize", size.to_string()));
        }

        self.get("monthly_series", symbol, "/time_series", &params)
            .await
    }

    /// 요약 합성용 개별 호출 결과 처리.
    ///
    /// 데이터 수준 실패(필드 누락, 업스트림 데이터 에러)는 None으로
    /// 강등하고, 전송 수준 실패와 요청 한도 초과는 전체 요약을
    /// 중단시킵니다.
    fn tolerate<T>(
        operation: &'static str,
        symbol: &str,
        result: ProviderResult<T>,
    ) -> ProviderResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_transport() || matches!(e, ProviderError::RateLimited) => Err(e),
            Err(e) => {
                warn!("요약 {} 호출 강등 ({}): {}", operation, symbol, e);
                Ok(None)
            }
        }
    }
}

// ============================================================================
// MarketDataProvider 구현
// ============================================================================

#[async_trait]
impl MarketDataProvider for TwelveDataProvider {
    fn name(&self) -> &str {
        "twelvedata"
    }

    async fn quote(&self, symbol: &str) -> ProviderResult<CanonicalQuote> {
        let raw = self.fetch_quote(symbol).await?;
        normalize::normalize_quote(symbol, raw)
    }

    async fn overview(&self, symbol: &str) -> ProviderResult<CanonicalOverview> {
        // profile과 statistics는 순서 의존성이 없으므로 동시 발행
        let (profile, statistics) =
            tokio::join!(self.fetch_profile(symbol), self.fetch_statistics(symbol));

        let profile = profile?;
        // statistics는 정당하게 실패할 수 있음 - 빈 지표로 대체
        let statistics = match statistics {
            Ok(response) => response.statistics,
            Err(e) => {
                warn!("statistics 호출 실패, 지표 없이 진행 ({}): {}", symbol, e);
                None
            }
        };

        normalize::normalize_overview(symbol, profile, statistics)
    }

    async fn monthly_series(&self, symbol: &str) -> ProviderResult<CanonicalMonthlySeries> {
        let raw = self.fetch_time_series(symbol, None).await?;
        normalize::normalize_monthly_series(symbol, raw)
    }

    async fn summary(&self, symbol: &str) -> ProviderResult<CanonicalSummary> {
        let (quote, profile, series) = tokio::join!(
            self.fetch_quote(symbol),
            self.fetch_profile(symbol),
            self.fetch_time_series(symbol, Some(SUMMARY_OUTPUT_SIZE)),
        );

        let quote = Self::tolerate("quote", symbol, quote)?;
        let profile = Self::tolerate("profile", symbol, profile)?;
        let series = Self::tolerate("monthly_series", symbol, series)?;

        Ok(normalize::compose_summary(symbol, quote, profile, series))
    }
}
