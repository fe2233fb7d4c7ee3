//! 정규화(canonical) 시장 데이터 모델.
//!
//! 어떤 업스트림 제공자가 데이터를 공급했는지와 무관하게 서비스가
//! 반환하는 단일 내부 표현입니다. 모든 모델은 요청 단위로 생성되고
//! 직렬화 후 폐기되며, 생성 이후 변경되지 않습니다.
//!
//! # 센티널 규약
//!
//! 제공자가 구조적으로 공급할 수 없는 필드는 생략되는 대신 명시적
//! 센티널("N/A" 또는 "0")로 채워집니다. 호출자는 이 값을 실제 0과
//! 구분해서 해석해야 합니다.

mod overview;
mod quote;
mod series;
mod summary;

pub use overview::CanonicalOverview;
pub use quote::CanonicalQuote;
pub use series::{CanonicalMonthlySeries, MonthlyBar, SeriesMeta};
pub use summary::{CanonicalSummary, PricePoint, SUMMARY_TIMELINE};

/// 문자열 필드용 "제공 불가" 센티널.
pub const NOT_AVAILABLE: &str = "N/A";

/// 숫자 문자열 필드용 기본 센티널.
pub const ZERO: &str = "0";
