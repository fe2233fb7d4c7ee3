//! Alpha Vantage 제공자 (레거시 변형).
//!
//! <https://www.alphavantage.co> 단일 엔드포인트에 `function=` 쿼리로
//! 멀티플렉싱하는 API입니다. 한도 초과와 에러를 HTTP 상태가 아니라
//! 200 본문의 마커 문자열로 알리므로, 역직렬화 전에 원시 본문을
//! 먼저 검사합니다.

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

use models::{AvGlobalQuoteResponse, AvMonthlySeries, AvOverview};

/// 기본 API URL.
const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

// ============================================================================
// 설정
// ============================================================================

/// Alpha Vantage 클라이언트 설정.
///
/// # 보안
/// - `Debug` 구현은 `api_key`를 마스킹합니다.
#[derive(Clone)]
pub struct AlphaVantageConfig {
    /// API 키
    pub api_key: String,
    /// 기본 URL (테스트 시 재정의 가능)
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl fmt::Debug for AlphaVantageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageConfig")
            .field("api_key", &"***REDACTED***")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AlphaVantageConfig {
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

/// Alpha Vantage 제공자 구현.
pub struct AlphaVantageProvider {
    config: AlphaVantageConfig,
    client: Client,
}

impl AlphaVantageProvider {
    /// 새 제공자 생성.
    ///
    /// # Errors
    /// HTTP 클라이언트 생성에 실패하면 `ProviderError::Config`를 반환합니다.
    pub fn new(config: AlphaVantageConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::Config(format!("HTTP 클라이언트 생성 실패: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// 본문 마커 검사.
    ///
    /// 이 API는 한도 초과와 심볼 에러를 200 응답 본문의 최상위 키로
    /// 알립니다:
    /// - `"Information"` / `"Note"` 키 → 요청 한도 초과
    /// - `"Error Message"` 키 → 업스트림 데이터 에러
    ///
    /// 정상 시계열 응답의 Meta Data에는 `"1. Information"` 키가
    /// 들어 있으므로 따옴표를 포함한 키 형태로만 매칭합니다.
    fn validate_body(body: &str) -> ProviderResult<()> {
        if body.contains("\"Information\"") || body.contains("\"Note\"") {
            return Err(ProviderError::RateLimited);
        }
        if body.contains("\"Error Message\"") {
            return Err(ProviderError::UpstreamData(body.to_string()));
        }
        Ok(())
    }

    /// `function=` 호출 후 본문 검증 및 역직렬화.
    async fn call<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        function: &str,
        symbol: &str,
    ) -> ProviderResult<T> {
        debug!("GET function={} ({} {})", function, operation, symbol);

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("function", function),
                ("symbol", symbol),
                ("apikey", self.config.api_key.as_str()),
            ])
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

        Self::validate_body(&body)?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))
    }

    /// 요약 합성용 개별 호출 결과 처리. 데이터 수준 실패는 None으로
    /// 강등하고 전송 수준 실패와 한도 초과는 전파합니다.
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
impl MarketDataProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "alphavantage"
    }

    async fn quote(&self, symbol: &str) -> ProviderResult<CanonicalQuote> {
        let raw: AvGlobalQuoteResponse = self.call("quote", "GLOBAL_QUOTE", symbol).await?;
        normalize::normalize_quote(symbol, raw)
    }

    async fn overview(&self, symbol: &str) -> ProviderResult<CanonicalOverview> {
        let raw: AvOverview = self.call("overview", "OVERVIEW", symbol).await?;
        normalize::normalize_overview(symbol, raw)
    }

    async fn monthly_series(&self, symbol: &str) -> ProviderResult<CanonicalMonthlySeries> {
        let raw: AvMonthlySeries = self
            .call("monthly_series", "TIME_SERIES_MONTHLY", symbol)
            .await?;
        normalize::normalize_monthly_series(symbol, raw)
    }

    async fn summary(&self, symbol: &str) -> ProviderResult<CanonicalSummary> {
        let (quote, overview, series) = tokio::join!(
            self.quote(symbol),
            self.overview(symbol),
            self.monthly_series(symbol),
        );

        let quote = Self::tolerate("quote", symbol, quote)?;
        let overview = Self::tolerate("overview", symbol, overview)?;
        let series = Self::tolerate("monthly_series", symbol, series)?;

        Ok(normalize::compose_summary(symbol, quote, overview, series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_body_rate_limit_markers() {
        assert!(matches!(
            AlphaVantageProvider::validate_body(r#"{"Information": "limit reached"}"#),
            Err(ProviderError::RateLimited)
        ));
        assert!(matches!(
            AlphaVantageProvider::validate_body(r#"{"Note": "call frequency"}"#),
            Err(ProviderError::RateLimited)
        ));
    }

    #[test]
    fn test_validate_body_error_marker() {
        assert!(matches!(
            AlphaVantageProvider::validate_body(r#"{"Error Message": "Invalid API call"}"#),
            Err(ProviderError::UpstreamData(_))
        ));
    }

    #[test]
    fn test_validate_body_clean() {
        assert!(AlphaVantageProvider::validate_body(r#"{"Global Quote": {}}"#).is_ok());
    }

    // 정상 시계열 응답의 "1. Information" 메타 키는 한도 초과 신호가 아니다.
    #[test]
    fn test_validate_body_ignores_meta_information_key() {
        let body = r#"{
            "Meta Data": {
                "1. Information": "Monthly Prices (open, high, low, close) and Volumes",
                "2. Symbol": "IBM",
                "3. Last Refreshed": "2023-10-27",
                "4. Time Zone": "US/Eastern"
            },
            "Monthly Time Series": {}
        }"#;
        assert!(AlphaVantageProvider::validate_body(body).is_ok());
    }
}
