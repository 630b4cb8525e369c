//! DTO (Data Transfer Object) 모듈
//!
//! HTTP 경계에서 사용하는 요청/응답 구조체들을 정의합니다.
//! 요청 DTO는 `validator` 기반 선언적 검증을 수행하고,
//! 응답 DTO는 엔티티의 민감한 필드를 구조적으로 제거합니다.

pub mod products;
pub mod users;
