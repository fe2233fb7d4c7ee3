//! 주식 데이터 집계 서비스의 핵심 도메인 모델과 공용 유틸리티.
//!
//! 이 크레이트는 제공자(프로바이더)에 독립적인 정규화 모델과
//! 서비스 전반에서 사용되는 유틸리티를 제공합니다:
//!
//! - [`models`]: 정규화된 시세/기업개요/월간시계열/요약 모델
//! - [`parse`]: 관용적 숫자 파싱, 퍼센트 접미사 정규화, 월 라벨 변환
//! - [`config`]: 환경변수 기반 애플리케이션 설정
//! - [`logging`]: tracing 기반 로깅 초기화
//! - [`error`]: 핵심 에러 타입

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod parse;

pub use config::{AppConfig, DatabaseConfig, MarketDataConfig, ServerConfig};
pub use error::{CoreError, CoreResult};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use models::{
    CanonicalMonthlySeries, CanonicalOverview, CanonicalQuote, CanonicalSummary, MonthlyBar,
    PricePoint, SeriesMeta, NOT_AVAILABLE, SUMMARY_TIMELINE, ZERO,
};
pub use parse::{ensure_percent_suffix, month_label, normalize_symbol, parse_lenient};
