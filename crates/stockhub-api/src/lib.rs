//! 주식 데이터 REST API 서버.
//!
//! 활성 시장 데이터 제공자를 통해 정규화된 시세/기업 개요/월간
//! 시계열/요약을 제공하고, 사용자별 관심종목을 관리합니다.
//!
//! # 모듈 구성
//!
//! - [`routes`]: REST 엔드포인트 정의
//! - [`repository`]: PostgreSQL 접근 계층
//! - [`state`]: 핸들러 공유 상태
//! - [`error`]: 통합 에러 응답과 상태 코드 대응

pub mod error;
pub mod repository;
pub mod routes;
pub mod state;

pub use error::{ApiErrorResponse, ApiResult};
pub use routes::create_api_router;
pub use state::AppState;
