//! 정규화된 월간 시계열 모델.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 시계열 메타데이터.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct SeriesMeta {
    /// 시계열 설명 텍스트
    pub information: String,
    /// 종목 심볼
    pub symbol: String,
    /// 마지막 갱신 시점 (제공자가 노출하지 않으면 "N/A")
    pub last_refreshed: String,
    /// 거래소 시간대
    pub time_zone: String,
}

/// 월간 OHLCV 레코드.
///
/// 숫자는 업스트림 문자열 그대로 보존합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct MonthlyBar {
    /// 시가
    pub open: String,
    /// 고가
    pub high: String,
    /// 저가
    pub low: String,
    /// 종가
    pub close: String,
    /// 거래량
    pub volume: String,
}

/// 제공자 중립적인 월간 시계열.
///
/// # 불변식
///
/// - `series`는 삽입 순서(=시간 순서)를 보존
/// - 업스트림에서 같은 날짜가 중복되면 먼저 본 항목만 유지 (first-wins)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct CanonicalMonthlySeries {
    /// 메타데이터
    pub meta: SeriesMeta,
    /// 날짜 → OHLCV (삽입 순서 보존)
    #[cfg_attr(feature = "utoipa-support", schema(value_type = Object))]
    pub series: IndexMap<String, MonthlyBar>,
}

impl CanonicalMonthlySeries {
    /// 날짜-바 쌍 목록에서 first-wins 규칙으로 시계열 구성.
    ///
    /// 입력 순서를 보존하며, 중복 날짜는 처음 본 항목만 남깁니다.
    pub fn from_bars(
        meta: SeriesMeta,
        bars: impl IntoIterator<Item = (String, MonthlyBar)>,
    ) -> Self {
        let mut series = IndexMap::new();
        for (date, bar) in bars {
            series.entry(date).or_insert(bar);
        }
        Self { meta, series }
    }
}
