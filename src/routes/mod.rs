//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자, 상품 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용할 수 있습니다:
//!
//! ## 인증 불필요 (Public 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/users")
//!         .service(handlers::users::create_user) // 회원가입은 인증 불필요
//!         .service(handlers::users::login)       // 로그인 자체는 인증 불필요
//! );
//! ```
//!
//! ## 인증 필요 (Protected 라우트)
//! ```rust,ignore
//! web::scope("")
//!     .wrap(AuthMiddleware::required())
//!     .service(handlers::users::logout)
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_product_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// ## Public 라우트 (인증 불필요)
/// - `GET /users` - 사용자 목록 조회
/// - `POST /users` - 사용자 생성 (회원가입)
/// - `POST /users/login` - 로그인
///
/// ## Protected 라우트 (Bearer 토큰 필요)
/// - `POST /users/logout` - 현재 토큰 철회
/// - `POST /users/logoutAll` - 전체 토큰 철회
/// - `DELETE /users/me` - 본인 계정 삭제
///
/// Protected 라우트들은 인증 미들웨어가 감싼 내부 스코프에 등록되므로,
/// Public 라우트에는 미들웨어가 적용되지 않습니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            // Public routes
            .service(handlers::users::get_users)
            .service(handlers::users::create_user)
            .service(handlers::users::login)
            // Protected routes
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::users::logout)
                    .service(handlers::users::logout_all)
                    .service(handlers::users::delete_me),
            ),
    );
}

/// 상품 관련 라우트를 설정합니다
///
/// - `GET /products` - 상품 목록 조회
/// - `POST /products` - 상품 생성
///
/// 상품 라우트는 모두 Public 입니다.
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .service(handlers::products::get_products)
            .service(handlers::products::create_product),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "shop_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "authentication": "Session Tokens"
        }
    }))
}
