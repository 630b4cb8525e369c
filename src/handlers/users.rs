//! # User Management HTTP Handlers
//!
//! 사용자 관리와 인증 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 인증 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `GET` | `/users` | 불필요 | 200, 공개 뷰 배열 | 400 |
//! | `POST` | `/users` | 불필요 | 201, {user, token} | 400 |
//! | `POST` | `/users/login` | 불필요 | 200, {user, token} | 400 (빈 본문) |
//! | `POST` | `/users/logout` | Bearer | 200, 빈 본문 | 500 |
//! | `POST` | `/users/logoutAll` | Bearer | 200, 빈 본문 | 500 |
//! | `DELETE` | `/users/me` | Bearer | 200, 삭제된 공개 뷰 | 500 |
//!
//! 로그인 실패 응답은 의도적으로 빈 400 본문입니다. 존재하지 않는
//! 이메일인지 잘못된 비밀번호인지에 대한 어떤 힌트도 주지 않습니다.

use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, post, web};
use validator::Validate;

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::users::request::{CreateUserRequest, LoginRequest};
use crate::domain::dto::users::response::{AuthResponse, UserResponse};
use crate::errors::errors::AppError;
use crate::state::AppState;

/// 전체 사용자 목록 조회 핸들러
///
/// 모든 사용자의 공개 뷰를 반환합니다. 스토어 오류는 이 엔드포인트의
/// 계약에 따라 400으로 보고됩니다.
#[get("")]
pub async fn get_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.user_service.list_users().await {
        Ok(users) => Ok(HttpResponse::Ok().json(users)),
        Err(e) => {
            log::error!("사용자 목록 조회 실패: {}", e);
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}

/// 사용자 생성 핸들러
///
/// 새로운 사용자 계정을 생성하고 첫 세션 토큰을 발급합니다.
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "a@x.com",
///   "password": "secret12",
///   "phone": 5551234
/// }
/// ```
///
/// # 응답
///
/// 성공 시 201과 `{ "user": {...}, "token": "..." }`.
/// 검증 실패(형식 오류, 비밀번호 정책 위반, 이메일 중복)는 400.
#[post("")]
pub async fn create_user(
    state: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.user_service.register(payload.into_inner()).await?;
    let token = state.token_service.issue(&user).await?;

    Ok(HttpResponse::Created().json(AuthResponse::new(user, token)))
}

/// 로그인 핸들러
///
/// 자격 증명이 일치하면 새 세션 토큰을 발급합니다. 기존 토큰은
/// 유지되므로 여러 기기에서 동시에 로그인할 수 있습니다.
/// 실패 시에는 빈 400 본문만 반환합니다.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let result = async {
        let user = state
            .user_service
            .find_by_credentials(&payload.email, &payload.password)
            .await?;
        let token = state.token_service.issue(&user).await?;

        Ok::<_, AppError>(AuthResponse::new(user, token))
    }
    .await;

    match result {
        Ok(body) => Ok(HttpResponse::Ok().json(body)),
        Err(e) => {
            log::warn!("로그인 실패: {}", e);
            Ok(HttpResponse::BadRequest().finish())
        }
    }
}

/// 로그아웃 핸들러
///
/// **이번 요청에 사용된 토큰만** 철회합니다. 같은 사용자의 다른 기기
/// 세션은 유효하게 유지됩니다.
#[post("/logout")]
pub async fn logout(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let auth = current_user(&req)?;

    match state.token_service.revoke(&auth.user, &auth.token).await {
        Ok(()) => Ok(HttpResponse::Ok().finish()),
        Err(e) => {
            log::error!("로그아웃 실패: {}", e);
            Ok(HttpResponse::InternalServerError().finish())
        }
    }
}

/// 전체 로그아웃 핸들러
///
/// 사용자의 모든 세션 토큰을 철회합니다.
#[post("/logoutAll")]
pub async fn logout_all(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let auth = current_user(&req)?;

    match state.token_service.revoke_all(&auth.user).await {
        Ok(()) => Ok(HttpResponse::Ok().finish()),
        Err(e) => {
            log::error!("전체 로그아웃 실패: {}", e);
            Ok(HttpResponse::InternalServerError().finish())
        }
    }
}

/// 본인 계정 삭제 핸들러
///
/// 인증된 사용자 자신의 계정을 삭제하고, 삭제된 사용자의 공개 뷰를
/// 반환합니다. 소유한 토큰은 함께 제거됩니다.
#[delete("/me")]
pub async fn delete_me(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let auth = current_user(&req)?;

    match state.user_service.delete_account(&auth.user).await {
        Ok(()) => Ok(HttpResponse::Ok().json(UserResponse::from(auth.user))),
        Err(e) => {
            log::error!("계정 삭제 실패: {}", e);
            Ok(HttpResponse::InternalServerError().finish())
        }
    }
}

/// Request Extensions에서 인증 컨텍스트 추출
///
/// 인증 미들웨어를 통과한 요청에만 존재합니다.
fn current_user(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    req.extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| AppError::AuthenticationError("인증 정보가 없습니다".to_string()))
}
