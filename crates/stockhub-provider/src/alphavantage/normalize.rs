//! Alpha Vantage 응답 → 정규화 모델 변환.
//!
//! 이 제공자는 정규화 모델의 원형에 가까운 형태를 내려주므로 변환은
//! 대부분 키 이름 정리와 센티널 채움입니다.

use stockhub_core::{
    ensure_percent_suffix, normalize_symbol, parse_lenient, CanonicalMonthlySeries,
    CanonicalOverview, CanonicalQuote, CanonicalSummary, MonthlyBar, SeriesMeta,
    NOT_AVAILABLE, SUMMARY_TIMELINE, ZERO,
};

use super::models::{AvGlobalQuoteResponse, AvMonthlySeries, AvOverview};
use crate::error::{ProviderError, ProviderResult};
use crate::summary::{build_price_series, first_non_blank, series_stats};

fn na(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn num(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| ZERO.to_string())
}

/// `GLOBAL_QUOTE` 응답 정규화.
///
/// `"Global Quote"` 블록 또는 그 안의 심볼이 없으면
/// [`ProviderError::MissingField`]로 실패합니다. 변동률은 업스트림이
/// 이미 `%`를 붙여 주지만 정확히 하나만 남도록 다시 보장합니다.
pub fn normalize_quote(
    symbol: &str,
    response: AvGlobalQuoteResponse,
) -> ProviderResult<CanonicalQuote> {
    let quote = response.global_quote.ok_or(ProviderError::MissingField {
        operation: "quote",
        symbol: symbol.to_string(),
        field: "Global Quote",
    })?;

    let upstream_symbol = quote
        .symbol
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ProviderError::MissingField {
            operation: "quote",
            symbol: symbol.to_string(),
            field: "01. symbol",
        })?;

    Ok(CanonicalQuote {
        symbol: normalize_symbol(upstream_symbol),
        open: num(quote.open),
        high: num(quote.high),
        low: num(quote.low),
        price: num(quote.price),
        volume: num(quote.volume),
        latest_trading_day: na(quote.latest_trading_day),
        previous_close: num(quote.previous_close),
        change: num(quote.change),
        change_percent: ensure_percent_suffix(&num(quote.change_percent)),
    })
}

/// `OVERVIEW` 응답 정규화 (근사 통과).
///
/// 이 제공자는 CIK/52주 범위/이동평균/배당일까지 직접 공급하므로
/// 센티널은 실제로 빠진 필드에만 들어갑니다.
pub fn normalize_overview(symbol: &str, raw: AvOverview) -> ProviderResult<CanonicalOverview> {
    let upstream_symbol = raw
        .symbol
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ProviderError::MissingField {
            operation: "overview",
            symbol: symbol.to_string(),
            field: "Symbol",
        })?;

    Ok(CanonicalOverview {
        symbol: normalize_symbol(upstream_symbol),
        name: na(raw.name),
        description: na(raw.description),
        cik: na(raw.cik),
        exchange: na(raw.exchange),
        currency: na(raw.currency),
        country: na(raw.country),
        sector: na(raw.sector),
        industry: na(raw.industry),
        address: na(raw.address),
        website: na(raw.official_site),
        fiscal_year_end: na(raw.fiscal_year_end),
        latest_quarter: na(raw.latest_quarter),
        market_capitalization: num(raw.market_capitalization),
        ebitda: num(raw.ebitda),
        pe_ratio: num(raw.pe_ratio),
        peg_ratio: num(raw.peg_ratio),
        book_value: num(raw.book_value),
        dividend_per_share: num(raw.dividend_per_share),
        dividend_yield: num(raw.dividend_yield),
        eps: num(raw.eps),
        revenue_per_share_ttm: num(raw.revenue_per_share_ttm),
        profit_margin: num(raw.profit_margin),
        operating_margin_ttm: num(raw.operating_margin_ttm),
        return_on_assets_ttm: num(raw.return_on_assets_ttm),
        return_on_equity_ttm: num(raw.return_on_equity_ttm),
        revenue_ttm: num(raw.revenue_ttm),
        gross_profit_ttm: num(raw.gross_profit_ttm),
        diluted_eps_ttm: num(raw.diluted_eps_ttm),
        quarterly_earnings_growth_yoy: num(raw.quarterly_earnings_growth_yoy),
        quarterly_revenue_growth_yoy: num(raw.quarterly_revenue_growth_yoy),
        analyst_target_price: num(raw.analyst_target_price),
        trailing_pe: num(raw.trailing_pe),
        forward_pe: num(raw.forward_pe),
        price_to_sales_ratio_ttm: num(raw.price_to_sales_ratio_ttm),
        price_to_book_ratio: num(raw.price_to_book_ratio),
        ev_to_revenue: num(raw.ev_to_revenue),
        ev_to_ebitda: num(raw.ev_to_ebitda),
        beta: num(raw.beta),
        week_52_high: num(raw.week_52_high),
        week_52_low: num(raw.week_52_low),
        day_50_moving_average: num(raw.day_50_moving_average),
        day_200_moving_average: num(raw.day_200_moving_average),
        shares_outstanding: num(raw.shares_outstanding),
        dividend_date: na(raw.dividend_date),
        ex_dividend_date: na(raw.ex_dividend_date),
    })
}

/// `TIME_SERIES_MONTHLY` 응답 정규화.
///
/// 시계열 맵이 없으면 실패합니다. 날짜 키 순서는 응답 순서를 따르고
/// 중복 날짜는 first-wins로 접습니다.
pub fn normalize_monthly_series(
    symbol: &str,
    response: AvMonthlySeries,
) -> ProviderResult<CanonicalMonthlySeries> {
    let series = response.series.ok_or(ProviderError::MissingField {
        operation: "monthly_series",
        symbol: symbol.to_string(),
        field: "Monthly Time Series",
    })?;

    let meta = response.meta.unwrap_or_default();
    let series_meta = SeriesMeta {
        information: meta
            .information
            .unwrap_or_else(|| "Monthly Prices (open, high, low, close) and Volumes".to_string()),
        symbol: meta
            .symbol
            .map(|s| normalize_symbol(&s))
            .unwrap_or_else(|| normalize_symbol(symbol)),
        last_refreshed: na(meta.last_refreshed),
        time_zone: na(meta.time_zone),
    };

    let bars = series.into_iter().map(|(date, bar)| {
        (
            date,
            MonthlyBar {
                open: num(bar.open),
                high: num(bar.high),
                low: num(bar.low),
                close: num(bar.close),
                volume: num(bar.volume),
            },
        )
    });

    Ok(CanonicalMonthlySeries::from_bars(series_meta, bars))
}

/// 정규화된 세 출력을 요약으로 합성.
///
/// Twelve Data 쪽과 동일한 파생 파이프라인을 쓰되 입력이 이미
/// 정규화 모델입니다. 없는 구성 요소는 센티널로 강등됩니다.
pub fn compose_summary(
    symbol: &str,
    quote: Option<CanonicalQuote>,
    overview: Option<CanonicalOverview>,
    series: Option<CanonicalMonthlySeries>,
) -> CanonicalSummary {
    let quote = quote.unwrap_or_default();
    let overview = overview.unwrap_or_default();

    let points: Vec<(String, String)> = series
        .map(|s| {
            s.series
                .into_iter()
                .map(|(date, bar)| (date, bar.close))
                .collect()
        })
        .unwrap_or_default();

    let price_series = build_price_series(points);
    let (week52_high, week52_low, year_start_price) = series_stats(&price_series);

    CanonicalSummary {
        symbol: normalize_symbol(symbol),
        company_name: first_non_blank(&[Some(overview.name.as_str())]).to_string(),
        exchange: first_non_blank(&[Some(overview.exchange.as_str())]).to_string(),
        sector: first_non_blank(&[Some(overview.sector.as_str())]).to_string(),
        timeline: SUMMARY_TIMELINE.to_string(),
        price: parse_lenient(&quote.price),
        daily_change: parse_lenient(&quote.change),
        daily_change_percent: parse_lenient(quote.change_percent.trim_end_matches('%')),
        market_cap: parse_lenient(&overview.market_capitalization),
        week52_high,
        week52_low,
        year_start_price,
        description: first_non_blank(&[Some(overview.description.as_str())]).to_string(),
        price_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphavantage::models::{AvGlobalQuote, AvMonthlyBar};
    use indexmap::IndexMap;

    fn sample_response() -> AvGlobalQuoteResponse {
        AvGlobalQuoteResponse {
            global_quote: Some(AvGlobalQuote {
                symbol: Some("IBM".to_string()),
                price: Some("143.5500".to_string()),
                change: Some("-0.4300".to_string()),
                change_percent: Some("-0.2986%".to_string()),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_normalize_quote_keeps_single_percent_suffix() {
        let quote = normalize_quote("IBM", sample_response()).unwrap();
        assert_eq!(quote.price, "143.5500");
        assert_eq!(quote.change_percent, "-0.2986%");
        assert_eq!(quote.open, "0");
    }

    #[test]
    fn test_normalize_quote_missing_block_fails() {
        let result = normalize_quote("IBM", AvGlobalQuoteResponse::default());
        assert!(matches!(
            result,
            Err(ProviderError::MissingField { field: "Global Quote", .. })
        ));
    }

    #[test]
    fn test_normalize_overview_passthrough_and_sentinels() {
        let raw = AvOverview {
            symbol: Some("IBM".to_string()),
            name: Some("International Business Machines".to_string()),
            cik: Some("51143".to_string()),
            week_52_high: Some("199.18".to_string()),
            dividend_date: Some("2024-03-09".to_string()),
            ..Default::default()
        };
        let overview = normalize_overview("IBM", raw).unwrap();

        assert_eq!(overview.cik, "51143");
        assert_eq!(overview.week_52_high, "199.18");
        assert_eq!(overview.dividend_date, "2024-03-09");
        // 빠진 필드만 센티널
        assert_eq!(overview.sector, "N/A");
        assert_eq!(overview.pe_ratio, "0");
    }

    #[test]
    fn test_normalize_monthly_series_requires_series_map() {
        let result = normalize_monthly_series("IBM", AvMonthlySeries::default());
        assert!(matches!(
            result,
            Err(ProviderError::MissingField { field: "Monthly Time Series", .. })
        ));
    }

    #[test]
    fn test_normalize_monthly_series_preserves_order() {
        let mut map = IndexMap::new();
        map.insert(
            "2023-10-31".to_string(),
            AvMonthlyBar {
                close: Some("168.22".to_string()),
                ..Default::default()
            },
        );
        map.insert(
            "2023-09-29".to_string(),
            AvMonthlyBar {
                close: Some("154".to_string()),
                ..Default::default()
            },
        );

        let series = normalize_monthly_series(
            "IBM",
            AvMonthlySeries {
                meta: None,
                series: Some(map),
            },
        )
        .unwrap();

        let dates: Vec<&String> = series.series.keys().collect();
        assert_eq!(dates, vec!["2023-10-31", "2023-09-29"]);
        assert_eq!(series.meta.symbol, "IBM");
    }

    #[test]
    fn test_compose_summary_all_missing_degrades() {
        let summary = compose_summary("IBM", None, None, None);
        assert_eq!(summary.company_name, "N/A");
        assert_eq!(summary.price, 0.0);
        assert!(summary.price_series.is_empty());
    }
}
