//! 정규화된 종목 요약 모델.

use serde::{Deserialize, Serialize};

/// 가격 시계열 포인트 (차트용 라벨 + 값).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct PricePoint {
    /// 표시 라벨 (3글자 월 약어, 파싱 불가 시 원본 날짜 문자열)
    pub label: String,
    /// 종가
    pub value: f64,
}

impl PricePoint {
    /// 새 포인트 생성.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// 제공자 중립적인 종목 요약.
///
/// 시세 + 기업 정보 + 최근 12개월 가격 시계열을 합성한 파생 모델입니다.
///
/// # 파생 관계
///
/// - `week52_high`/`week52_low` = `price_series` 값의 최대/최소
/// - `year_start_price` = 정리된 시계열의 가장 이른 포인트 값 (비어 있으면 0)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct CanonicalSummary {
    /// 종목 심볼
    pub symbol: String,
    /// 회사명
    pub company_name: String,
    /// 거래소
    pub exchange: String,
    /// 섹터
    pub sector: String,
    /// 시계열 범위 라벨 (고정 "1Y")
    pub timeline: String,
    /// 현재가
    pub price: f64,
    /// 전일 대비 변동
    pub daily_change: f64,
    /// 전일 대비 변동률
    pub daily_change_percent: f64,
    /// 시가총액
    pub market_cap: f64,
    /// 52주 최고가
    pub week52_high: f64,
    /// 52주 최저가
    pub week52_low: f64,
    /// 연초 가격
    pub year_start_price: f64,
    /// 기업 설명
    pub description: String,
    /// 가격 시계열 (최근 최대 12개, 날짜 오름차순)
    pub price_series: Vec<PricePoint>,
}

/// 요약 시계열 범위 라벨.
pub const SUMMARY_TIMELINE: &str = "1Y";
