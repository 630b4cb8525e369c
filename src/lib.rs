//! 샵 서비스 백엔드
//!
//! Rust 기반의 사용자/상품 REST API 서비스입니다.
//! MongoDB 문서 저장소 위에서 두 리소스의 CRUD를 제공하며,
//! 사용자 리소스에 대해 세션 토큰 기반 인증을 수행합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 계정 생성, 로그인, 로그아웃, 계정 삭제
//! - **세션 토큰**: 서명된 토큰의 발급/검증/철회, 다중 기기 로그인 지원
//! - **상품 CRUD**: 비즈니스 규칙 없는 순수 데이터 레코드
//! - **명시적 DI**: `main`에서 구성된 상태가 모든 컴포넌트에 전달됨
//! - **MongoDB**: 사용자/상품 데이터 영구 저장, 이메일 유니크 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리 (+ 인증 미들웨어)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 자격 증명 / 세션 토큰 생명주기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shop_service_backend::db::Database;
//! use shop_service_backend::state::AppState;
//!
//! let database = Arc::new(Database::new().await?);
//! let state = AppState::new(database);
//!
//! // 사용자 생성 및 토큰 발급
//! let user = state.user_service.register(request).await?;
//! let token = state.token_service.issue(&user).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
