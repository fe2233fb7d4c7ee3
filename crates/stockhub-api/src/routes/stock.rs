//! 주식 데이터 조회 endpoint.
//!
//! 활성 제공자를 통해 시세/기업 개요/월간 시계열/요약을 조회합니다.
//! 핸들러는 제공자 trait에만 의존하므로 제공자를 교체해도 이
//! 모듈은 변하지 않습니다.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use stockhub_core::{
    normalize_symbol, CanonicalMonthlySeries, CanonicalOverview, CanonicalQuote,
    CanonicalSummary,
};
use tracing::info;

use crate::error::{provider_error_response, ApiErrorResponse, ApiResult};
use crate::state::AppState;

/// 심볼 쿼리 파라미터.
#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub symbol: String,
}

/// 심볼 파라미터 검증 및 정규화.
///
/// 공백뿐인 심볼은 400으로 거부합니다.
fn validate_symbol(query: &SymbolQuery) -> Result<String, (StatusCode, Json<ApiErrorResponse>)> {
    let symbol = normalize_symbol(&query.symbol);
    if symbol.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiErrorResponse::new(
                "INVALID_SYMBOL",
                "symbol 파라미터가 비어 있습니다",
            )),
        ));
    }
    Ok(symbol)
}

/// 현재 시세 조회.
/// GET /api/v1/stock/quote?symbol=AAPL
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolQuery>,
) -> ApiResult<Json<CanonicalQuote>> {
    let symbol = validate_symbol(&query)?;
    info!(%symbol, "시세 조회");

    let quote = state
        .provider
        .quote(&symbol)
        .await
        .map_err(provider_error_response)?;

    Ok(Json(quote))
}

/// 기업 개요 조회.
/// GET /api/v1/stock/overview?symbol=AAPL
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolQuery>,
) -> ApiResult<Json<CanonicalOverview>> {
    let symbol = validate_symbol(&query)?;
    info!(%symbol, "기업 개요 조회");

    let overview = state
        .provider
        .overview(&symbol)
        .await
        .map_err(provider_error_response)?;

    Ok(Json(overview))
}

/// 월간 시계열 조회.
/// GET /api/v1/stock/monthly-series?symbol=AAPL
pub async fn get_monthly_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolQuery>,
) -> ApiResult<Json<CanonicalMonthlySeries>> {
    let symbol = validate_symbol(&query)?;
    info!(%symbol, "월간 시계열 조회");

    let series = state
        .provider
        .monthly_series(&symbol)
        .await
        .map_err(provider_error_response)?;

    Ok(Json(series))
}

/// 종목 요약 조회 (시세 + 기업 정보 + 1년 가격 시계열).
/// GET /api/v1/stock/summary?symbol=AAPL
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolQuery>,
) -> ApiResult<Json<CanonicalSummary>> {
    let symbol = validate_symbol(&query)?;
    info!(%symbol, "요약 조회");

    let summary = state
        .provider
        .summary(&symbol)
        .await
        .map_err(provider_error_response)?;

    Ok(Json(summary))
}

/// 주식 데이터 라우터 생성.
pub fn stock_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quote", get(get_quote))
        .route("/overview", get(get_overview))
        .route("/monthly-series", get(get_monthly_series))
        .route("/summary", get(get_summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mockito::{Matcher, Server};
    use stockhub_provider::{TwelveDataConfig, TwelveDataProvider};
    use tower::ServiceExt;

    fn app_for(server: &mockito::ServerGuard) -> Router {
        let config = TwelveDataConfig::new("test-key").with_base_url(server.url());
        let provider = TwelveDataProvider::new(config).unwrap();
        let state = Arc::new(AppState::new(Arc::new(provider)));
        Router::new().nest("/api/v1/stock", stock_router()).with_state(state)
    }

    #[tokio::test]
    async fn test_get_quote_returns_normalized_json() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/quote")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"symbol": "AAPL", "close": "168.22000", "percent_change": "0.79693"}"#,
            )
            .create_async()
            .await;

        let response = app_for(&server)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/stock/quote?symbol=aapl")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let quote: CanonicalQuote = serde_json::from_slice(&body).unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, "168.22000");
        assert_eq!(quote.change_percent, "0.79693%");
    }

    #[tokio::test]
    async fn test_blank_symbol_is_bad_request() {
        let server = Server::new_async().await;
        let response = app_for(&server)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/stock/quote?symbol=%20%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upstream_429_maps_to_too_many_requests() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/quote")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body("limit")
            .create_async()
            .await;

        let response = app_for(&server)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/stock/quote?symbol=AAPL")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "RATE_LIMITED");
    }

    #[tokio::test]
    async fn test_upstream_5xx_maps_to_bad_gateway() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/time_series")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let response = app_for(&server)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/stock/monthly-series?symbol=AAPL")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
