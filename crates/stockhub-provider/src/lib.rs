//! 업스트림 시장 데이터 제공자 커넥터와 정규화 엔진.
//!
//! 서로 다른 필드명/단위/퍼센트 표기/호출 구성을 가진 업스트림
//! API들을 호출하고, 결과를 `stockhub-core`의 정규화 모델로
//! 변환합니다. 제공자 교체는 [`MarketDataProvider`] trait 뒤에서
//! 이루어지며 정규화 모델과 HTTP 표면은 변하지 않습니다.
//!
//! # 모듈 구성
//!
//! - [`traits`]: 제공자 중립 capability trait
//! - [`error`]: 제공자 에러 분류
//! - [`twelvedata`]: Twelve Data 제공자 (profile+statistics 합성)
//! - [`alphavantage`]: Alpha Vantage 제공자 (200 응답 본문 내 에러 신호)
//! - [`summary`]: 두 제공자가 공유하는 요약 파생 로직
//! - [`factory`]: 설정 기반 제공자 선택

pub mod alphavantage;
pub mod error;
pub mod factory;
pub mod summary;
pub mod traits;
pub mod twelvedata;

pub use alphavantage::{AlphaVantageConfig, AlphaVantageProvider};
pub use error::{ProviderError, ProviderResult};
pub use factory::{create_provider, ProviderKind};
pub use traits::MarketDataProvider;
pub use twelvedata::{TwelveDataConfig, TwelveDataProvider};
