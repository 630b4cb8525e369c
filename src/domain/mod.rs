//! # Domain Module
//!
//! 서비스의 핵심 도메인 타입들을 정의하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`entities`] - 데이터베이스에 저장되는 도메인 엔티티 (User, Product)
//! - [`dto`] - HTTP 경계에서 사용하는 요청/응답 데이터 구조
//! - [`auth`] - 요청 스코프 인증 컨텍스트
//! - [`token`] - 세션 토큰 클레임 구조
//!
//! 엔티티와 DTO를 분리하여 민감한 필드(비밀번호 해시, 토큰 목록)가
//! 외부 표현으로 직렬화되지 않도록 경계를 강제합니다.

pub mod auth;
pub mod dto;
pub mod entities;
pub mod token;
