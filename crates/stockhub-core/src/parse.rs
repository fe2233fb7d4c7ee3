//! 관용적(permissive) 파싱 유틸리티.
//!
//! 업스트림 금융 API는 제공 불가 지표를 빈 문자열이나 "N/A"로
//! 반환하는 경우가 많습니다. 이 모듈의 함수들은 그런 입력을
//! 에러 없이 기본값으로 흡수하는 계약을 따릅니다.

use chrono::NaiveDate;

/// 문자열을 f64로 관용적으로 파싱.
///
/// 빈 문자열, 공백, 파싱 불가 입력은 모두 0.0으로 처리하며
/// 절대 에러를 반환하지 않습니다.
pub fn parse_lenient(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// 퍼센트 문자열이 정확히 하나의 `%` 접미사를 갖도록 정규화.
///
/// 제공자에 따라 `%`가 이미 붙어 오는 경우(예: "0.7969%")와
/// 숫자만 오는 경우(예: "0.79693")가 섞여 있으므로, 기존 접미사를
/// 제거한 뒤 하나만 붙입니다. 빈 입력은 "0%"가 됩니다.
pub fn ensure_percent_suffix(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('%');
    if trimmed.is_empty() {
        "0%".to_string()
    } else {
        format!("{}%", trimmed)
    }
}

/// 날짜 문자열에서 3글자 영문 월 약어 라벨 생성.
///
/// 입력의 앞 10글자(`YYYY-MM-DD`)만 사용합니다. 파싱할 수 없는
/// 입력은 원본 문자열을 그대로 반환하며 절대 에러를 내지 않습니다.
pub fn month_label(datetime: &str) -> String {
    // 10번째 바이트가 문자 경계가 아니면(멀티바이트 입력) 원본 전체로 폴백
    let date_part = datetime.get(..10).unwrap_or(datetime);

    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b").to_string(),
        Err(_) => datetime.to_string(),
    }
}

/// 심볼 정규화 (공백 제거 + 대문자).
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}
