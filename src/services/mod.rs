//! 서비스 모듈
//!
//! 비즈니스 로직 계층입니다. 각 서비스는 생성자에서 리포지토리를
//! 명시적으로 주입받으며, 핸들러와 미들웨어는 애플리케이션 상태를 통해
//! 서비스에 접근합니다.

pub mod auth;
pub mod users;
