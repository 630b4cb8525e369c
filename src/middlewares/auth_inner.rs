//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, HttpResponse, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::services::auth::token_service::TokenService;
use crate::state::AppState;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthGateService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let auth_result = authenticate_request(&req).await;

            match auth_result {
                Ok(auth_user) => {
                    // 해석된 사용자와 사용된 토큰을 Request Extensions에 저장
                    log::debug!("인증 성공: 사용자 ID {:?}", auth_user.user.id_string());
                    req.extensions_mut().insert(auth_user);
                }
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "authentication_required",
                        "message": "유효한 인증 토큰이 필요합니다"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 Bearer 토큰을 추출하고 세션 레지스트리에 대해 검증
async fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    // 협력자는 애플리케이션 상태에서 해석 (전역 싱글톤 없음)
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("애플리케이션 상태가 없습니다".to_string()))?;

    // Authorization 헤더 추출
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string())
        })?;

    // 스킴 접두사 제거 후 토큰 검증 및 소유 사용자 해석
    let token = TokenService::extract_bearer_token(auth_header);
    let user = state.token_service.validate(token).await?;

    Ok(AuthenticatedUser {
        user,
        token: token.to_string(),
    })
}
