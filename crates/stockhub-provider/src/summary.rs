//! 요약 파생 로직.
//!
//! 제공자에 독립적인 순수 함수들입니다. 두 제공자 모두 시계열
//! 포인트를 (날짜, 종가 문자열) 쌍으로 내린 뒤 여기서 정리합니다.

use stockhub_core::{month_label, parse_lenient, PricePoint};

/// 요약 시계열의 최대 포인트 수.
pub const MAX_SERIES_POINTS: usize = 12;

/// (날짜, 종가 문자열) 쌍 목록을 요약용 가격 시계열로 정리.
///
/// 파이프라인:
/// 1. 날짜 오름차순 정렬
/// 2. 종가를 관용적으로 파싱하고 0 이하(무효 데이터) 포인트 제거
/// 3. 가장 최근 [`MAX_SERIES_POINTS`]개만 유지
/// 4. 라벨은 3글자 월 약어 (파싱 불가 시 원본 날짜)
pub fn build_price_series(mut points: Vec<(String, String)>) -> Vec<PricePoint> {
    points.sort_by(|a, b| a.0.cmp(&b.0));

    let valid: Vec<PricePoint> = points
        .into_iter()
        .filter_map(|(date, close)| {
            let value = parse_lenient(&close);
            if value > 0.0 {
                Some(PricePoint::new(month_label(&date), value))
            } else {
                None
            }
        })
        .collect();

    let skip = valid.len().saturating_sub(MAX_SERIES_POINTS);
    valid.into_iter().skip(skip).collect()
}

/// 정리된 시계열의 파생 통계: (52주 최고, 52주 최저, 연초 가격).
///
/// 빈 시계열은 세 값 모두 0.0입니다.
pub fn series_stats(series: &[PricePoint]) -> (f64, f64, f64) {
    if series.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let mut high = f64::MIN;
    let mut low = f64::MAX;
    for point in series {
        high = high.max(point.value);
        low = low.min(point.value);
    }
    let year_start = series[0].value;

    (high, low, year_start)
}

/// 여러 후보 중 처음으로 비어 있지 않은 값 선택.
///
/// 회사명/거래소/섹터 해석에 사용합니다 (profile 우선, 그다음
/// quote, 모두 비어 있으면 "N/A").
pub fn first_non_blank<'a>(candidates: &[Option<&'a str>]) -> &'a str {
    candidates
        .iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or("N/A")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, close: &str) -> (String, String) {
        (date.to_string(), close.to_string())
    }

    #[test]
    fn test_build_price_series_sorts_ascending() {
        let series = build_price_series(vec![
            raw("2023-10-27", "168.22"),
            raw("2023-09-29", "154"),
        ]);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0], PricePoint::new("Sep", 154.0));
        assert_eq!(series[1], PricePoint::new("Oct", 168.22));
    }

    #[test]
    fn test_build_price_series_drops_non_positive() {
        let series = build_price_series(vec![
            raw("2023-08-31", "0"),
            raw("2023-09-29", "-5"),
            raw("2023-10-27", "168.22"),
            raw("2023-11-30", ""),
        ]);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].value, 168.22);
    }

    #[test]
    fn test_build_price_series_trims_to_most_recent_12() {
        let points: Vec<(String, String)> = (1..=15)
            .map(|month| {
                (
                    format!("2023-{:02}-01", ((month - 1) % 12) + 1),
                    format!("{}", month * 10),
                )
            })
            .collect();
        // 15개 유효 포인트 → 가장 최근 12개만
        let series = build_price_series(points);

        assert_eq!(series.len(), MAX_SERIES_POINTS);
    }

    #[test]
    fn test_build_price_series_fewer_than_12_keeps_all() {
        let series = build_price_series(vec![
            raw("2023-09-29", "154"),
            raw("2023-10-27", "168.22"),
        ]);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_build_price_series_unparsable_date_keeps_raw_label() {
        let series = build_price_series(vec![raw("garbage-date", "100")]);
        assert_eq!(series[0].label, "garbage-date");
    }

    #[test]
    fn test_series_stats() {
        let series = vec![
            PricePoint::new("Sep", 154.0),
            PricePoint::new("Oct", 168.22),
        ];
        let (high, low, year_start) = series_stats(&series);
        assert_eq!(high, 168.22);
        assert_eq!(low, 154.0);
        assert_eq!(year_start, 154.0);
    }

    #[test]
    fn test_series_stats_empty_is_zero() {
        let (high, low, year_start) = series_stats(&[]);
        assert_eq!((high, low, year_start), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_first_non_blank() {
        assert_eq!(first_non_blank(&[None, Some("  "), Some("Apple Inc")]), "Apple Inc");
        assert_eq!(first_non_blank(&[None, None]), "N/A");
        assert_eq!(first_non_blank(&[Some(""), Some("NASDAQ")]), "NASDAQ");
    }
}
