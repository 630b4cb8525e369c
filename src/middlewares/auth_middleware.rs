//! 세션 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고
//! 해석된 사용자 정보를 요청에 부착합니다.
//!
//! 요청당 상태는 두 가지뿐입니다: 미인증(초기) → 인증됨(요청 종료까지
//! 유지). 검증 실패 시 요청은 즉시 401로 종료되며 재시도나 대체 경로는
//! 없습니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthGateService;

/// 세션 토큰 인증 미들웨어
///
/// 보호가 필요한 라우트 스코프에 `.wrap(AuthMiddleware::required())`로
/// 적용합니다. 협력자(토큰 서비스)는 전역 인스턴스가 아닌 애플리케이션
/// 상태에서 해석됩니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateService {
            service: Rc::new(service),
        }))
    }
}
