//! Alpha Vantage API 응답 타입.
//!
//! 번호 접두사 키(`"01. symbol"`)와 PascalCase 키를 rename으로
//! 흡수합니다. 월간 시계열은 날짜 키 맵이므로 순서 보존을 위해
//! IndexMap으로 받습니다.

use indexmap::IndexMap;
use serde::Deserialize;

/// `function=GLOBAL_QUOTE` 최상위 응답.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvGlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    pub global_quote: Option<AvGlobalQuote>,
}

/// `"Global Quote"` 블록.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvGlobalQuote {
    #[serde(rename = "01. symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "02. open")]
    pub open: Option<String>,
    #[serde(rename = "03. high")]
    pub high: Option<String>,
    #[serde(rename = "04. low")]
    pub low: Option<String>,
    #[serde(rename = "05. price")]
    pub price: Option<String>,
    #[serde(rename = "06. volume")]
    pub volume: Option<String>,
    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close")]
    pub previous_close: Option<String>,
    #[serde(rename = "09. change")]
    pub change: Option<String>,
    #[serde(rename = "10. change percent")]
    pub change_percent: Option<String>,
}

/// `function=OVERVIEW` 응답 (평평한 PascalCase 맵).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvOverview {
    #[serde(rename = "Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "CIK")]
    pub cik: Option<String>,
    #[serde(rename = "Exchange")]
    pub exchange: Option<String>,
    #[serde(rename = "Currency")]
    pub currency: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Sector")]
    pub sector: Option<String>,
    #[serde(rename = "Industry")]
    pub industry: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "OfficialSite")]
    pub official_site: Option<String>,
    #[serde(rename = "FiscalYearEnd")]
    pub fiscal_year_end: Option<String>,
    #[serde(rename = "LatestQuarter")]
    pub latest_quarter: Option<String>,
    #[serde(rename = "MarketCapitalization")]
    pub market_capitalization: Option<String>,
    #[serde(rename = "EBITDA")]
    pub ebitda: Option<String>,
    #[serde(rename = "PERatio")]
    pub pe_ratio: Option<String>,
    #[serde(rename = "PEGRatio")]
    pub peg_ratio: Option<String>,
    #[serde(rename = "BookValue")]
    pub book_value: Option<String>,
    #[serde(rename = "DividendPerShare")]
    pub dividend_per_share: Option<String>,
    #[serde(rename = "DividendYield")]
    pub dividend_yield: Option<String>,
    #[serde(rename = "EPS")]
    pub eps: Option<String>,
    #[serde(rename = "RevenuePerShareTTM")]
    pub revenue_per_share_ttm: Option<String>,
    #[serde(rename = "ProfitMargin")]
    pub profit_margin: Option<String>,
    #[serde(rename = "OperatingMarginTTM")]
    pub operating_margin_ttm: Option<String>,
    #[serde(rename = "ReturnOnAssetsTTM")]
    pub return_on_assets_ttm: Option<String>,
    #[serde(rename = "ReturnOnEquityTTM")]
    pub return_on_equity_ttm: Option<String>,
    #[serde(rename = "RevenueTTM")]
    pub revenue_ttm: Option<String>,
    #[serde(rename = "GrossProfitTTM")]
    pub gross_profit_ttm: Option<String>,
    #[serde(rename = "DilutedEPSTTM")]
    pub diluted_eps_ttm: Option<String>,
    #[serde(rename = "QuarterlyEarningsGrowthYOY")]
    pub quarterly_earnings_growth_yoy: Option<String>,
    #[serde(rename = "QuarterlyRevenueGrowthYOY")]
    pub quarterly_revenue_growth_yoy: Option<String>,
    #[serde(rename = "AnalystTargetPrice")]
    pub analyst_target_price: Option<String>,
    #[serde(rename = "TrailingPE")]
    pub trailing_pe: Option<String>,
    #[serde(rename = "ForwardPE")]
    pub forward_pe: Option<String>,
    #[serde(rename = "PriceToSalesRatioTTM")]
    pub price_to_sales_ratio_ttm: Option<String>,
    #[serde(rename = "PriceToBookRatio")]
    pub price_to_book_ratio: Option<String>,
    #[serde(rename = "EVToRevenue")]
    pub ev_to_revenue: Option<String>,
    #[serde(rename = "EVToEBITDA")]
    pub ev_to_ebitda: Option<String>,
    #[serde(rename = "Beta")]
    pub beta: Option<String>,
    #[serde(rename = "52WeekHigh")]
    pub week_52_high: Option<String>,
    #[serde(rename = "52WeekLow")]
    pub week_52_low: Option<String>,
    #[serde(rename = "50DayMovingAverage")]
    pub day_50_moving_average: Option<String>,
    #[serde(rename = "200DayMovingAverage")]
    pub day_200_moving_average: Option<String>,
    #[serde(rename = "SharesOutstanding")]
    pub shares_outstanding: Option<String>,
    #[serde(rename = "DividendDate")]
    pub dividend_date: Option<String>,
    #[serde(rename = "ExDividendDate")]
    pub ex_dividend_date: Option<String>,
}

/// `function=TIME_SERIES_MONTHLY` 응답.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvMonthlySeries {
    #[serde(rename = "Meta Data")]
    pub meta: Option<AvSeriesMeta>,
    /// 날짜 → OHLCV. 응답에 실려 온 순서를 그대로 보존합니다.
    #[serde(rename = "Monthly Time Series")]
    pub series: Option<IndexMap<String, AvMonthlyBar>>,
}

/// `"Meta Data"` 블록.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvSeriesMeta {
    #[serde(rename = "1. Information")]
    pub information: Option<String>,
    #[serde(rename = "2. Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: Option<String>,
    #[serde(rename = "4. Time Zone")]
    pub time_zone: Option<String>,
}

/// 월간 OHLCV 포인트.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvMonthlyBar {
    #[serde(rename = "1. open")]
    pub open: Option<String>,
    #[serde(rename = "2. high")]
    pub high: Option<String>,
    #[serde(rename = "3. low")]
    pub low: Option<String>,
    #[serde(rename = "4. close")]
    pub close: Option<String>,
    #[serde(rename = "5. volume")]
    pub volume: Option<String>,
}
