//! HTTP 핸들러 모듈
//!
//! 각 핸들러는 (검증된 요청 본문) → (스토어 연산) → (상태 코드 + 본문)의
//! 얇은 함수입니다. 인터페이스 표가 기본 매핑과 다른 상태 코드를
//! 요구하는 경우에만 명시적인 `match`로 응답을 구성합니다.

pub mod products;
pub mod users;
