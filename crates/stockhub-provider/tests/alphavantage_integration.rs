//! Alpha Vantage 제공자 통합 테스트 (mockito 기반).

use mockito::{Matcher, Server, ServerGuard};
use stockhub_provider::alphavantage::{AlphaVantageConfig, AlphaVantageProvider};
use stockhub_provider::error::ProviderError;
use stockhub_provider::traits::MarketDataProvider;

fn provider_for(server: &ServerGuard) -> AlphaVantageProvider {
    let config = AlphaVantageConfig::new("test-key").with_base_url(server.url());
    AlphaVantageProvider::new(config).unwrap()
}

fn match_function(function: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("function".into(), function.into()),
        Matcher::UrlEncoded("symbol".into(), "IBM".into()),
        Matcher::UrlEncoded("apikey".into(), "test-key".into()),
    ])
}

fn global_quote_body() -> &'static str {
    r#"{
        "Global Quote": {
            "01. symbol": "IBM",
            "02. open": "143.1500",
            "03. high": "144.2200",
            "04. low": "142.9100",
            "05. price": "143.5500",
            "06. volume": "3809554",
            "07. latest trading day": "2023-10-27",
            "08. previous close": "143.9800",
            "09. change": "-0.4300",
            "10. change percent": "-0.2986%"
        }
    }"#
}

#[tokio::test]
async fn quote_unwraps_global_quote_block() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(match_function("GLOBAL_QUOTE"))
        .with_status(200)
        .with_body(global_quote_body())
        .create_async()
        .await;

    let provider = provider_for(&server);
    let quote = provider.quote("IBM").await.unwrap();

    mock.assert_async().await;
    assert_eq!(quote.symbol, "IBM");
    assert_eq!(quote.price, "143.5500");
    // 업스트림이 이미 붙인 %도 정확히 하나만 유지
    assert_eq!(quote.change_percent, "-0.2986%");
    assert_eq!(quote.previous_close, "143.9800");
}

#[tokio::test]
async fn information_marker_is_rate_limited() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"Information": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."}"#)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let result = provider.quote("IBM").await;

    assert!(matches!(result, Err(ProviderError::RateLimited)));
}

#[tokio::test]
async fn note_marker_is_rate_limited() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"Note": "Please consider optimizing your API call frequency."}"#)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let result = provider.monthly_series("IBM").await;

    assert!(matches!(result, Err(ProviderError::RateLimited)));
}

#[tokio::test]
async fn error_message_marker_is_upstream_data_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let result = provider.quote("IBM").await;

    assert!(matches!(result, Err(ProviderError::UpstreamData(_))));
}

#[tokio::test]
async fn overview_passes_native_fields_through() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(match_function("OVERVIEW"))
        .with_status(200)
        .with_body(
            r#"{
                "Symbol": "IBM",
                "Name": "International Business Machines",
                "CIK": "51143",
                "Exchange": "NYSE",
                "Sector": "TECHNOLOGY",
                "MarketCapitalization": "128639926272",
                "PERatio": "22.15",
                "52WeekHigh": "199.18",
                "52WeekLow": "130.68",
                "DividendDate": "2024-03-09"
            }"#,
        )
        .create_async()
        .await;

    let provider = provider_for(&server);
    let overview = provider.overview("IBM").await.unwrap();

    assert_eq!(overview.name, "International Business Machines");
    assert_eq!(overview.cik, "51143");
    assert_eq!(overview.week_52_high, "199.18");
    assert_eq!(overview.dividend_date, "2024-03-09");
    assert_eq!(overview.market_capitalization, "128639926272");
    // 빠진 필드만 센티널
    assert_eq!(overview.industry, "N/A");
    assert_eq!(overview.eps, "0");
}

#[tokio::test]
async fn monthly_series_parses_keyed_map() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(match_function("TIME_SERIES_MONTHLY"))
        .with_status(200)
        .with_body(
            r#"{
                "Meta Data": {
                    "1. Information": "Monthly Prices (open, high, low, close) and Volumes",
                    "2. Symbol": "IBM",
                    "3. Last Refreshed": "2023-10-27",
                    "4. Time Zone": "US/Eastern"
                },
                "Monthly Time Series": {
                    "2023-10-27": {
                        "1. open": "140.0400",
                        "2. high": "144.4600",
                        "3. low": "135.8700",
                        "4. close": "143.5500",
                        "5. volume": "83664114"
                    },
                    "2023-09-29": {
                        "1. open": "147.2600",
                        "2. high": "151.9300",
                        "3. low": "140.0000",
                        "4. close": "140.3000",
                        "5. volume": "86371925"
                    }
                }
            }"#,
        )
        .create_async()
        .await;

    let provider = provider_for(&server);
    let series = provider.monthly_series("IBM").await.unwrap();

    assert_eq!(series.meta.symbol, "IBM");
    assert_eq!(series.meta.last_refreshed, "2023-10-27");
    assert_eq!(series.meta.time_zone, "US/Eastern");
    let dates: Vec<&String> = series.series.keys().collect();
    assert_eq!(dates, vec!["2023-10-27", "2023-09-29"]);
    assert_eq!(series.series["2023-09-29"].close, "140.3000");
}

#[tokio::test]
async fn summary_composes_three_functions() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(match_function("GLOBAL_QUOTE"))
        .with_status(200)
        .with_body(global_quote_body())
        .create_async()
        .await;
    server
        .mock("GET", "/")
        .match_query(match_function("OVERVIEW"))
        .with_status(200)
        .with_body(
            r#"{
                "Symbol": "IBM",
                "Name": "International Business Machines",
                "Exchange": "NYSE",
                "Sector": "TECHNOLOGY",
                "Description": "IBM is a technology company.",
                "MarketCapitalization": "128639926272"
            }"#,
        )
        .create_async()
        .await;
    server
        .mock("GET", "/")
        .match_query(match_function("TIME_SERIES_MONTHLY"))
        .with_status(200)
        .with_body(
            r#"{
                "Meta Data": {"2. Symbol": "IBM"},
                "Monthly Time Series": {
                    "2023-10-27": {"4. close": "143.5500"},
                    "2023-09-29": {"4. close": "140.3000"}
                }
            }"#,
        )
        .create_async()
        .await;

    let provider = provider_for(&server);
    let summary = provider.summary("IBM").await.unwrap();

    assert_eq!(summary.symbol, "IBM");
    assert_eq!(summary.company_name, "International Business Machines");
    assert_eq!(summary.exchange, "NYSE");
    assert_eq!(summary.price, 143.55);
    assert_eq!(summary.daily_change_percent, -0.2986);
    assert_eq!(summary.week52_high, 143.55);
    assert_eq!(summary.week52_low, 140.3);
    assert_eq!(summary.year_start_price, 140.3);
    assert_eq!(summary.price_series.len(), 2);
    assert_eq!(summary.price_series[0].label, "Sep");
}

#[tokio::test]
async fn summary_rate_limit_aborts() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"Note": "call frequency exceeded"}"#)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let result = provider.summary("IBM").await;

    assert!(matches!(result, Err(ProviderError::RateLimited)));
}
