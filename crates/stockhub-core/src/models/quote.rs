//! 정규화된 시세 모델.

use serde::{Deserialize, Serialize};

/// 제공자 중립적인 시세 스냅샷.
///
/// 숫자 필드는 업스트림이 준 문자열을 그대로 보존합니다.
/// 중간에 float로 변환하면 정밀도가 손실될 수 있으므로
/// 재파싱하지 않습니다.
///
/// # 불변식
///
/// - `symbol`은 공백 제거 + 대문자
/// - 업스트림이 생략한 숫자 필드는 null 대신 "0"
/// - `change_percent`는 항상 정확히 하나의 `%` 접미사를 가짐
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct CanonicalQuote {
    /// 종목 심볼 (예: "AAPL")
    pub symbol: String,
    /// 시가
    pub open: String,
    /// 고가
    pub high: String,
    /// 저가
    pub low: String,
    /// 현재가 (제공자의 close/현재가 필드)
    pub price: String,
    /// 거래량
    pub volume: String,
    /// 기준 시점 (최근 거래일)
    pub latest_trading_day: String,
    /// 전일 종가
    pub previous_close: String,
    /// 전일 대비 변동
    pub change: String,
    /// 전일 대비 변동률 (`%` 접미사 포함)
    pub change_percent: String,
}
