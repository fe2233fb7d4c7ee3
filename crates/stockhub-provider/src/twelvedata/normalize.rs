//! Twelve Data 응답 → 정규화 모델 변환.
//!
//! 네트워크와 분리된 순수 변환 함수들입니다. 클라이언트가 원시
//! 응답을 넘기면 여기서 필드 대응, 단위/표기 정리, 센티널 채움,
//! 파생값 계산을 수행합니다.

use std::collections::HashMap;

use stockhub_core::{
    ensure_percent_suffix, normalize_symbol, parse_lenient, CanonicalMonthlySeries,
    CanonicalOverview, CanonicalQuote, CanonicalSummary, MonthlyBar, SeriesMeta,
    NOT_AVAILABLE, SUMMARY_TIMELINE, ZERO,
};

use super::models::{TdProfile, TdQuote, TdStatisticsData, TdTimeSeries};
use crate::error::{ProviderError, ProviderResult};
use crate::summary::{build_price_series, first_non_blank, series_stats};

/// 시세 응답 정규화.
///
/// 심볼이 없으면 [`ProviderError::MissingField`]로 실패합니다.
/// 나머지 숫자 필드는 문자열 그대로 통과시키고, 생략된 필드는
/// "0"으로 채웁니다. 변동률은 `%` 접미사를 보장합니다.
pub fn normalize_quote(symbol: &str, quote: TdQuote) -> ProviderResult<CanonicalQuote> {
    let upstream_symbol = quote
        .symbol
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ProviderError::MissingField {
            operation: "quote",
            symbol: symbol.to_string(),
            field: "symbol",
        })?;

    let zero = || ZERO.to_string();

    Ok(CanonicalQuote {
        symbol: normalize_symbol(upstream_symbol),
        open: quote.open.unwrap_or_else(zero),
        high: quote.high.unwrap_or_else(zero),
        low: quote.low.unwrap_or_else(zero),
        price: quote.close.unwrap_or_else(zero),
        volume: quote.volume.unwrap_or_else(zero),
        latest_trading_day: quote
            .datetime
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        previous_close: quote.previous_close.unwrap_or_else(zero),
        change: quote.change.unwrap_or_else(zero),
        change_percent: ensure_percent_suffix(&quote.percent_change.unwrap_or_else(zero)),
    })
}

/// 밸류에이션 지표 맵에서 채우는 필드의 고정 키 목록.
const VALUATION_KEYS: [(&str, fn(&mut CanonicalOverview) -> &mut String); 8] = [
    ("market_capitalization", |o| &mut o.market_capitalization),
    ("pe_ratio", |o| &mut o.pe_ratio),
    ("trailing_pe", |o| &mut o.trailing_pe),
    ("forward_pe", |o| &mut o.forward_pe),
    ("peg_ratio", |o| &mut o.peg_ratio),
    ("price_to_sales_ttm", |o| &mut o.price_to_sales_ratio_ttm),
    ("enterprise_to_revenue", |o| &mut o.ev_to_revenue),
    ("enterprise_to_ebitda", |o| &mut o.ev_to_ebitda),
];

/// 재무 지표 맵에서 채우는 필드의 고정 키 목록.
const FINANCIAL_KEYS: [(&str, fn(&mut CanonicalOverview) -> &mut String); 14] = [
    ("profit_margin", |o| &mut o.profit_margin),
    ("operating_margin", |o| &mut o.operating_margin_ttm),
    ("return_on_assets_ttm", |o| &mut o.return_on_assets_ttm),
    ("return_on_equity_ttm", |o| &mut o.return_on_equity_ttm),
    ("revenue_ttm", |o| &mut o.revenue_ttm),
    ("gross_profit_ttm", |o| &mut o.gross_profit_ttm),
    ("diluted_eps_ttm", |o| &mut o.diluted_eps_ttm),
    ("book_value", |o| &mut o.book_value),
    ("eps", |o| &mut o.eps),
    ("revenue_per_share_ttm", |o| &mut o.revenue_per_share_ttm),
    ("dividend_per_share", |o| &mut o.dividend_per_share),
    ("dividend_yield", |o| &mut o.dividend_yield),
    ("ebitda", |o| &mut o.ebitda),
    ("price_to_book", |o| &mut o.price_to_book_ratio),
];

fn lookup(map: &HashMap<String, String>, key: &str) -> Option<String> {
    map.get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// profile + statistics 두 응답을 기업 개요로 합성.
///
/// statistics는 정당하게 실패하거나 비어 있을 수 있으므로 Option으로
/// 받습니다 — 없으면 빈 맵으로 대체되고 지표 필드는 "0"으로
/// 남습니다. CIK/주소/52주 범위/이동평균/배당일 등 이 제공자가
/// 구조적으로 공급할 수 없는 필드는 응답 내용과 무관하게 항상
/// 센티널입니다.
pub fn normalize_overview(
    symbol: &str,
    profile: TdProfile,
    statistics: Option<TdStatisticsData>,
) -> ProviderResult<CanonicalOverview> {
    let upstream_symbol = profile
        .symbol
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ProviderError::MissingField {
            operation: "overview",
            symbol: symbol.to_string(),
            field: "symbol",
        })?;

    let mut overview = CanonicalOverview::sentinel(normalize_symbol(upstream_symbol));

    let na = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    overview.name = na(profile.name);
    overview.exchange = na(profile.exchange);
    overview.sector = na(profile.sector);
    overview.industry = na(profile.industry);
    overview.description = na(profile.description);
    overview.website = na(profile.website);
    overview.country = na(profile.country);
    overview.currency = na(profile.currency);

    let statistics = statistics.unwrap_or_default();
    let valuations = statistics.valuations_metrics.unwrap_or_default();
    let financials = statistics.financials.unwrap_or_default();

    for (key, field) in VALUATION_KEYS {
        if let Some(value) = lookup(&valuations, key) {
            *field(&mut overview) = value;
        }
    }
    for (key, field) in FINANCIAL_KEYS {
        if let Some(value) = lookup(&financials, key) {
            *field(&mut overview) = value;
        }
    }

    // profile에 market_cap이 직접 실려 오면 statistics보다 우선
    if let Some(cap) = profile.market_cap.filter(|v| !v.trim().is_empty()) {
        overview.market_capitalization = cap;
    }

    Ok(overview)
}

/// 월간 시계열 응답 정규화.
///
/// `values` 목록이 없으면 실패합니다. 업스트림 순서를 보존하면서
/// 중복 날짜는 first-wins로 접습니다. 이 제공자는 last-refreshed를
/// 노출하지 않으므로 센티널로 둡니다.
pub fn normalize_monthly_series(
    symbol: &str,
    response: TdTimeSeries,
) -> ProviderResult<CanonicalMonthlySeries> {
    let values = response.values.ok_or(ProviderError::MissingField {
        operation: "monthly_series",
        symbol: symbol.to_string(),
        field: "values",
    })?;

    let meta = response.meta.unwrap_or_default();
    let series_meta = SeriesMeta {
        information: "Monthly Time Series".to_string(),
        symbol: meta
            .symbol
            .map(|s| normalize_symbol(&s))
            .unwrap_or_else(|| normalize_symbol(symbol)),
        last_refreshed: NOT_AVAILABLE.to_string(),
        time_zone: meta
            .exchange_timezone
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    };

    let zero = || ZERO.to_string();
    let bars = values.into_iter().filter_map(|value| {
        let date = value.datetime?;
        Some((
            date,
            MonthlyBar {
                open: value.open.unwrap_or_else(zero),
                high: value.high.unwrap_or_else(zero),
                low: value.low.unwrap_or_else(zero),
                close: value.close.unwrap_or_else(zero),
                volume: value.volume.unwrap_or_else(zero),
            },
        ))
    });

    Ok(CanonicalMonthlySeries::from_bars(series_meta, bars))
}

/// 시세 + 프로필 + 시계열 세 응답을 요약으로 합성.
///
/// 각 구성 요소는 개별적으로 없을 수 있으며(부분 실패 허용),
/// 없는 쪽은 센티널로 강등됩니다.
pub fn compose_summary(
    symbol: &str,
    quote: Option<TdQuote>,
    profile: Option<TdProfile>,
    series: Option<TdTimeSeries>,
) -> CanonicalSummary {
    let quote = quote.unwrap_or_default();
    let profile = profile.unwrap_or_default();

    let points: Vec<(String, String)> = series
        .and_then(|s| s.values)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| Some((value.datetime?, value.close?)))
        .collect();

    let price_series = build_price_series(points);
    let (week52_high, week52_low, year_start_price) = series_stats(&price_series);

    let percent = quote
        .percent_change
        .as_deref()
        .map(|p| p.trim_end_matches('%').to_string())
        .unwrap_or_default();

    CanonicalSummary {
        symbol: normalize_symbol(symbol),
        company_name: first_non_blank(&[profile.name.as_deref(), quote.name.as_deref()])
            .to_string(),
        exchange: first_non_blank(&[profile.exchange.as_deref(), quote.exchange.as_deref()])
            .to_string(),
        sector: first_non_blank(&[profile.sector.as_deref()]).to_string(),
        timeline: SUMMARY_TIMELINE.to_string(),
        price: parse_lenient(quote.close.as_deref().unwrap_or_default()),
        daily_change: parse_lenient(quote.change.as_deref().unwrap_or_default()),
        daily_change_percent: parse_lenient(&percent),
        market_cap: parse_lenient(profile.market_cap.as_deref().unwrap_or_default()),
        week52_high,
        week52_low,
        year_start_price,
        description: first_non_blank(&[profile.description.as_deref()]).to_string(),
        price_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twelvedata::models::TdSeriesValue;

    fn sample_quote() -> TdQuote {
        TdQuote {
            symbol: Some("AAPL".to_string()),
            name: Some("Apple Inc".to_string()),
            exchange: Some("NASDAQ".to_string()),
            close: Some("168.22000".to_string()),
            percent_change: Some("0.79693".to_string()),
            change: Some("1.33000".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_quote_maps_close_and_percent() {
        let quote = normalize_quote("AAPL", sample_quote()).unwrap();
        assert_eq!(quote.price, "168.22000");
        assert_eq!(quote.change_percent, "0.79693%");
        // 생략된 숫자 필드는 "0"
        assert_eq!(quote.open, "0");
        assert_eq!(quote.volume, "0");
    }

    #[test]
    fn test_normalize_quote_missing_symbol_fails() {
        let result = normalize_quote("AAPL", TdQuote::default());
        assert!(matches!(
            result,
            Err(ProviderError::MissingField { field: "symbol", .. })
        ));
    }

    #[test]
    fn test_normalize_overview_without_statistics_defaults_to_zero() {
        let profile = TdProfile {
            symbol: Some("AAPL".to_string()),
            name: Some("Apple Inc".to_string()),
            sector: Some("Technology".to_string()),
            ..Default::default()
        };
        let overview = normalize_overview("AAPL", profile, None).unwrap();

        assert_eq!(overview.name, "Apple Inc");
        assert_eq!(overview.pe_ratio, "0");
        assert_eq!(overview.revenue_ttm, "0");
        // 구조적으로 공급 불가한 필드는 항상 센티널
        assert_eq!(overview.cik, "N/A");
        assert_eq!(overview.week_52_high, "0");
        assert_eq!(overview.dividend_date, "N/A");
    }

    #[test]
    fn test_normalize_monthly_series_requires_values() {
        let result = normalize_monthly_series("AAPL", TdTimeSeries::default());
        assert!(matches!(
            result,
            Err(ProviderError::MissingField { field: "values", .. })
        ));
    }

    #[test]
    fn test_compose_summary_two_points() {
        let series = TdTimeSeries {
            meta: None,
            values: Some(vec![
                TdSeriesValue {
                    datetime: Some("2023-10-27".to_string()),
                    close: Some("168.22".to_string()),
                    ..Default::default()
                },
                TdSeriesValue {
                    datetime: Some("2023-09-29".to_string()),
                    close: Some("154".to_string()),
                    ..Default::default()
                },
            ]),
        };

        let summary = compose_summary("aapl", Some(sample_quote()), None, Some(series));

        assert_eq!(summary.symbol, "AAPL");
        assert_eq!(summary.timeline, "1Y");
        assert_eq!(summary.week52_low, 154.0);
        assert_eq!(summary.week52_high, 168.22);
        assert_eq!(summary.year_start_price, 154.0);
        assert_eq!(summary.price_series.len(), 2);
        // profile이 없으면 quote의 이름으로 강등
        assert_eq!(summary.company_name, "Apple Inc");
        assert_eq!(summary.sector, "N/A");
    }

    #[test]
    fn test_compose_summary_everything_missing_degrades_to_sentinels() {
        let summary = compose_summary("AAPL", None, None, None);

        assert_eq!(summary.company_name, "N/A");
        assert_eq!(summary.price, 0.0);
        assert_eq!(summary.market_cap, 0.0);
        assert_eq!(summary.week52_high, 0.0);
        assert_eq!(summary.week52_low, 0.0);
        assert_eq!(summary.year_start_price, 0.0);
        assert!(summary.price_series.is_empty());
    }
}
