//! 리포지토리 모듈
//!
//! MongoDB 컬렉션에 대한 데이터 액세스 계층입니다.
//! 각 리포지토리는 명시적으로 주입된 [`crate::db::Database`] 핸들 위에서
//! 동작하며, 전역 연결 상태를 가지지 않습니다.

pub mod products;
pub mod users;
