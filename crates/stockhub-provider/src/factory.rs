//! 제공자 선택과 생성.

use std::str::FromStr;
use std::sync::Arc;

use stockhub_core::MarketDataConfig;
use tracing::info;

use crate::alphavantage::{AlphaVantageConfig, AlphaVantageProvider};
use crate::error::{ProviderError, ProviderResult};
use crate::traits::MarketDataProvider;
use crate::twelvedata::{TwelveDataConfig, TwelveDataProvider};

/// 지원하는 제공자 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    TwelveData,
    AlphaVantage,
}

impl FromStr for ProviderKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "twelvedata" => Ok(Self::TwelveData),
            "alphavantage" => Ok(Self::AlphaVantage),
            other => Err(ProviderError::Config(format!(
                "지원하지 않는 제공자: {}",
                other
            ))),
        }
    }
}

/// 설정에서 활성 제공자 생성.
///
/// # Errors
/// 제공자 이름이 유효하지 않거나 클라이언트 생성에 실패하면
/// `ProviderError::Config`를 반환합니다.
pub fn create_provider(
    config: &MarketDataConfig,
) -> ProviderResult<Arc<dyn MarketDataProvider>> {
    let kind = ProviderKind::from_str(&config.provider)?;
    info!("시장 데이터 제공자 초기화: {:?}", kind);

    match kind {
        ProviderKind::TwelveData => {
            let provider = TwelveDataProvider::new(TwelveDataConfig::from_market_data(config))?;
            Ok(Arc::new(provider))
        }
        ProviderKind::AlphaVantage => {
            let provider =
                AlphaVantageProvider::new(AlphaVantageConfig::from_market_data(config))?;
            Ok(Arc::new(provider))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_from_str() {
        assert_eq!(
            ProviderKind::from_str("twelvedata").unwrap(),
            ProviderKind::TwelveData
        );
        assert_eq!(
            ProviderKind::from_str(" AlphaVantage ").unwrap(),
            ProviderKind::AlphaVantage
        );
        assert!(ProviderKind::from_str("yahoo").is_err());
    }

    #[test]
    fn test_create_provider_unknown_name_fails() {
        let config = MarketDataConfig {
            provider: "unknown".to_string(),
            api_key: "test-key".to_string(),
            base_url: None,
            timeout_secs: 10,
        };
        assert!(matches!(
            create_provider(&config),
            Err(ProviderError::Config(_))
        ));
    }

    #[test]
    fn test_create_provider_twelvedata() {
        let config = MarketDataConfig {
            provider: "twelvedata".to_string(),
            api_key: "test-key".to_string(),
            base_url: None,
            timeout_secs: 10,
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.name(), "twelvedata");
    }
}
