//! 통합 API 에러 응답 타입.
//!
//! 모든 API 엔드포인트에서 일관된 에러 형식을 제공하고, 제공자
//! 에러를 HTTP 상태 코드로 대응시킵니다.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stockhub_provider::ProviderError;

/// 통합 API 에러 응답.
///
/// # 예시
///
/// ```json
/// {
///   "code": "RATE_LIMITED",
///   "message": "업스트림 API 요청 한도 초과",
///   "timestamp": 1738300800
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "NOT_FOUND", "RATE_LIMITED", "DB_ERROR")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 추가 에러 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// 에러 발생 타임스탬프 (Unix timestamp, 선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ApiErrorResponse {
    /// 기본 에러 생성 (타임스탬프 포함).
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// 상세 정보 포함 에러 생성.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 제공자 에러 → HTTP 응답 대응.
///
/// - `RateLimited` → 429
/// - `MissingField` / `UpstreamData` → 502 (업스트림이 쓸 수 없는 데이터를 반환)
/// - `Network` / `Parse` / `Api` → 502 (업스트림 도달 불가 또는 응답 손상)
/// - `Config` → 500
pub fn provider_error_response(error: ProviderError) -> (StatusCode, Json<ApiErrorResponse>) {
    let (status, code) = match &error {
        ProviderError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
        ProviderError::MissingField { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_INCOMPLETE"),
        ProviderError::UpstreamData(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_DATA_ERROR"),
        ProviderError::Network { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE"),
        ProviderError::Parse(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_MALFORMED"),
        ProviderError::Api { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        ProviderError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PROVIDER_CONFIG_ERROR"),
    };

    (status, Json(ApiErrorResponse::new(code, error.to_string())))
}

/// DB 에러 → 500 응답.
pub fn db_error_response(error: sqlx::Error) -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse::new("DB_ERROR", error.to_string())),
    )
}

/// DB 미설정 → 503 응답.
pub fn db_not_configured() -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiErrorResponse::new(
            "DB_NOT_CONFIGURED",
            "데이터베이스가 설정되지 않았습니다 (DATABASE_URL 확인)",
        )),
    )
}
