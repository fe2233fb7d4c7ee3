//! 데이터베이스 Repository 계층.
//!
//! 상태 없는 Repository 구조체들이 `&PgPool`을 받아 쿼리를
//! 실행합니다. 핸들러는 sqlx 에러를 HTTP 응답으로 변환하는 책임만
//! 가집니다.

pub mod favorites;
pub mod users;

pub use favorites::{FavoriteRecord, FavoriteRepository};
pub use users::{NewUser, UserRecord, UserRepository};
