//! Twelve Data API 응답 타입.
//!
//! 업스트림이 필드를 생략하는 경우가 흔하므로 전부 Option으로
//! 받습니다. 로직은 없고 관용적 역직렬화만 담당합니다.

use serde::Deserialize;
use std::collections::HashMap;

/// `/quote` 응답.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TdQuote {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub exchange: Option<String>,
    pub currency: Option<String>,
    pub datetime: Option<String>,
    pub open: Option<String>,
    pub high: Option<String>,
    pub low: Option<String>,
    pub close: Option<String>,
    pub volume: Option<String>,
    pub previous_close: Option<String>,
    pub change: Option<String>,
    pub percent_change: Option<String>,
}

/// `/profile` 응답.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TdProfile {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub exchange: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub market_cap: Option<String>,
}

/// `/statistics` 응답.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TdStatistics {
    pub statistics: Option<TdStatisticsData>,
}

/// `/statistics`의 중첩 지표 블록.
///
/// 평평한 문자열 키-값 맵 두 개(밸류에이션, 재무)에서 고정 키로
/// 조회합니다. 키가 없는 것은 설계된 케이스입니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TdStatisticsData {
    pub valuations_metrics: Option<HashMap<String, String>>,
    pub financials: Option<HashMap<String, String>>,
}

/// `/time_series` 응답.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TdTimeSeries {
    pub meta: Option<TdSeriesMeta>,
    pub values: Option<Vec<TdSeriesValue>>,
}

/// `/time_series` 메타 블록.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TdSeriesMeta {
    pub symbol: Option<String>,
    pub interval: Option<String>,
    pub currency: Option<String>,
    pub exchange_timezone: Option<String>,
    pub exchange: Option<String>,
    #[serde(rename = "type")]
    pub security_type: Option<String>,
}

/// `/time_series`의 개별 OHLCV 포인트.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TdSeriesValue {
    pub datetime: Option<String>,
    pub open: Option<String>,
    pub high: Option<String>,
    pub low: Option<String>,
    pub close: Option<String>,
    pub volume: Option<String>,
}
