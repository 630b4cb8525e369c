//! # Authentication Configuration Module
//!
//! JWT 토큰 서명에 사용되는 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```
//!
//! 프로덕션 환경에서 `JWT_SECRET`이 누락되면 기동 시점에 패닉이 발생합니다.
//! 개발/테스트 환경에서는 안전하지 않은 기본값이 사용됩니다.

use std::env;

use crate::config::Environment;

/// JWT 토큰 서명 설정을 관리하는 구조체
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀 키를 반환합니다.
    ///
    /// # Panics
    ///
    /// 프로덕션 환경에서 `JWT_SECRET` 환경 변수가 설정되지 않은 경우
    /// 패닉이 발생합니다. 개발 환경용 기본값은 절대 운영에 사용하면 안 됩니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            if Environment::current() == Environment::Production {
                panic!("JWT_SECRET must be set in production");
            }
            "shop-service-dev-insecure-secret".to_string()
        })
    }
}
