//! 제공자 에러 타입.

use thiserror::Error;

/// 업스트림 제공자 관련 에러.
///
/// 전파 정책:
/// - 식별 정보(심볼 등)가 없는 실패는 작업 전체를 중단시킵니다.
/// - 지표 수준의 공백은 에러가 아니라 센티널로 흡수됩니다
///   (이 enum에 해당 variant가 없는 이유입니다).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 네트워크/전송 에러 (연결 불가, 타임아웃 등)
    #[error("네트워크 에러 ({operation} {symbol}): {message}")]
    Network {
        /// 수행 중이던 작업 이름
        operation: &'static str,
        /// 대상 심볼
        symbol: String,
        /// 원인 메시지
        message: String,
    },

    /// 요청 한도 초과 (HTTP 429 또는 200 본문 내 신호)
    #[error("요청 한도 초과")]
    RateLimited,

    /// 업스트림이 명시적으로 보고한 데이터 에러
    #[error("업스트림 데이터 에러: {0}")]
    UpstreamData(String),

    /// 응답은 파싱됐지만 필수 필드가 누락됨
    #[error("필수 필드 누락 ({operation} {symbol}): {field}")]
    MissingField {
        /// 수행 중이던 작업 이름
        operation: &'static str,
        /// 대상 심볼
        symbol: String,
        /// 누락된 필드
        field: &'static str,
    },

    /// JSON 파싱 실패
    #[error("응답 파싱 실패: {0}")]
    Parse(String),

    /// 2xx가 아닌 HTTP 응답
    #[error("API 에러 {status}: {body}")]
    Api {
        /// HTTP 상태 코드
        status: u16,
        /// 응답 본문
        body: String,
    },

    /// 알 수 없는 제공자 이름 등 설정 에러
    #[error("제공자 설정 에러: {0}")]
    Config(String),
}

impl ProviderError {
    /// 전송 수준 실패인지 확인.
    ///
    /// 요약 합성에서 전송 수준 실패는 전체를 중단시키고,
    /// 데이터 수준 실패는 센티널로 강등됩니다.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Parse(_) | Self::Api { .. }
        )
    }
}

/// 제공자 작업을 위한 Result 타입.
pub type ProviderResult<T> = Result<T, ProviderError>;
