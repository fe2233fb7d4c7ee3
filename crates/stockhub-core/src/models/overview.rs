//! 정규화된 기업 개요 모델.

use serde::{Deserialize, Serialize};

use super::{NOT_AVAILABLE, ZERO};

/// 제공자 중립적인 기업 개요.
///
/// 서술 필드와 고정된 재무 지표 필드 집합으로 구성됩니다.
/// 활성 제공자가 공급할 수 없는 지표 필드는 생략되지 않고
/// 센티널("N/A" 또는 "0")로 채워집니다 — 구조적으로는 항상
/// 완전한 형태를 유지합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct CanonicalOverview {
    /// 종목 심볼
    pub symbol: String,
    /// 회사명
    pub name: String,
    /// 기업 설명
    pub description: String,
    /// SEC CIK 번호
    pub cik: String,
    /// 거래소
    pub exchange: String,
    /// 통화
    pub currency: String,
    /// 국가
    pub country: String,
    /// 섹터
    pub sector: String,
    /// 산업
    pub industry: String,
    /// 본사 주소
    pub address: String,
    /// 웹사이트
    pub website: String,
    /// 회계연도 마감
    pub fiscal_year_end: String,
    /// 최근 분기
    pub latest_quarter: String,
    /// 시가총액
    pub market_capitalization: String,
    /// EBITDA
    pub ebitda: String,
    /// P/E
    pub pe_ratio: String,
    /// PEG
    pub peg_ratio: String,
    /// 주당 순자산
    pub book_value: String,
    /// 주당 배당금
    pub dividend_per_share: String,
    /// 배당 수익률
    pub dividend_yield: String,
    /// EPS
    pub eps: String,
    /// 주당 매출 (TTM)
    pub revenue_per_share_ttm: String,
    /// 순이익률
    pub profit_margin: String,
    /// 영업이익률 (TTM)
    pub operating_margin_ttm: String,
    /// 총자산수익률 (TTM)
    pub return_on_assets_ttm: String,
    /// 자기자본수익률 (TTM)
    pub return_on_equity_ttm: String,
    /// 매출 (TTM)
    pub revenue_ttm: String,
    /// 매출총이익 (TTM)
    pub gross_profit_ttm: String,
    /// 희석 EPS (TTM)
    pub diluted_eps_ttm: String,
    /// 분기 순이익 성장률 (YoY)
    pub quarterly_earnings_growth_yoy: String,
    /// 분기 매출 성장률 (YoY)
    pub quarterly_revenue_growth_yoy: String,
    /// 애널리스트 목표가
    pub analyst_target_price: String,
    /// 후행 P/E
    pub trailing_pe: String,
    /// 선행 P/E
    pub forward_pe: String,
    /// P/S (TTM)
    pub price_to_sales_ratio_ttm: String,
    /// P/B
    pub price_to_book_ratio: String,
    /// EV/Revenue
    pub ev_to_revenue: String,
    /// EV/EBITDA
    pub ev_to_ebitda: String,
    /// 베타
    pub beta: String,
    /// 52주 최고가
    pub week_52_high: String,
    /// 52주 최저가
    pub week_52_low: String,
    /// 50일 이동평균
    pub day_50_moving_average: String,
    /// 200일 이동평균
    pub day_200_moving_average: String,
    /// 발행 주식 수
    pub shares_outstanding: String,
    /// 배당일
    pub dividend_date: String,
    /// 배당락일
    pub ex_dividend_date: String,
}

impl CanonicalOverview {
    /// 모든 필드가 센티널로 채워진 뼈대 생성.
    ///
    /// 제공자 정규화 로직이 공급 가능한 필드만 덮어씁니다.
    pub fn sentinel(symbol: impl Into<String>) -> Self {
        let na = NOT_AVAILABLE.to_string();
        let zero = ZERO.to_string();
        Self {
            symbol: symbol.into(),
            name: na.clone(),
            description: na.clone(),
            cik: na.clone(),
            exchange: na.clone(),
            currency: na.clone(),
            country: na.clone(),
            sector: na.clone(),
            industry: na.clone(),
            address: na.clone(),
            website: na.clone(),
            fiscal_year_end: na.clone(),
            latest_quarter: na.clone(),
            market_capitalization: zero.clone(),
            ebitda: zero.clone(),
            pe_ratio: zero.clone(),
            peg_ratio: zero.clone(),
            book_value: zero.clone(),
            dividend_per_share: zero.clone(),
            dividend_yield: zero.clone(),
            eps: zero.clone(),
            revenue_per_share_ttm: zero.clone(),
            profit_margin: zero.clone(),
            operating_margin_ttm: zero.clone(),
            return_on_assets_ttm: zero.clone(),
            return_on_equity_ttm: zero.clone(),
            revenue_ttm: zero.clone(),
            gross_profit_ttm: zero.clone(),
            diluted_eps_ttm: zero.clone(),
            quarterly_earnings_growth_yoy: zero.clone(),
            quarterly_revenue_growth_yoy: zero.clone(),
            analyst_target_price: zero.clone(),
            trailing_pe: zero.clone(),
            forward_pe: zero.clone(),
            price_to_sales_ratio_ttm: zero.clone(),
            price_to_book_ratio: zero.clone(),
            ev_to_revenue: zero.clone(),
            ev_to_ebitda: zero.clone(),
            beta: zero.clone(),
            week_52_high: zero.clone(),
            week_52_low: zero.clone(),
            day_50_moving_average: zero.clone(),
            day_200_moving_average: zero,
            shares_outstanding: na.clone(),
            dividend_date: na.clone(),
            ex_dividend_date: na,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_fills_every_field() {
        let overview = CanonicalOverview::sentinel("AAPL");
        assert_eq!(overview.symbol, "AAPL");
        assert_eq!(overview.name, "N/A");
        assert_eq!(overview.pe_ratio, "0");
        assert_eq!(overview.week_52_high, "0");
        assert_eq!(overview.dividend_date, "N/A");

        // 직렬화 시 어떤 필드도 누락되지 않아야 함
        let json = serde_json::to_value(&overview).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.values().all(|v| !v.is_null()));
    }
}
