//! 세션 토큰 레지스트리 서비스 구현
//!
//! HMAC-SHA256 서명된 JWT 기반의 세션 토큰 생명주기를 담당합니다.
//! 토큰은 발급 시 소유 사용자 문서의 토큰 목록에 추가되고,
//! 검증 시 서명 확인과 함께 해당 목록에 존재하는지 확인됩니다.
//! 즉 서명이 유효하더라도 철회된 토큰은 거부됩니다.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::domain::entities::users::user::User;
use crate::domain::token::token::TokenClaims;
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserRepository;

/// 세션 토큰 관리 서비스
///
/// 토큰 발급, 검증, 개별 철회, 전체 철회를 제공합니다.
/// 같은 사용자에 대해 동시에 발급된 여러 토큰이 모두 유효합니다
/// (다중 기기 로그인).
pub struct TokenService {
    /// 토큰 목록 영속화를 위한 사용자 리포지토리
    user_repo: Arc<UserRepository>,
}

impl TokenService {
    /// 새 토큰 서비스 생성
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 사용자를 위한 새 세션 토큰 발급
    ///
    /// 사용자 ID를 바인딩한 클레임에 서명하고, 토큰을 사용자의 토큰
    /// 목록에 추가한 뒤 호출자에게 반환합니다. `jti` 클레임이 UUID v4
    /// 이므로 같은 순간에 발급된 토큰끼리도 값이 겹치지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 사용자 ID 없음 또는 서명 실패
    /// * `AppError::DatabaseError` - 토큰 목록 영속화 실패
    pub async fn issue(&self, user: &User) -> Result<String, AppError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let claims = TokenClaims {
            sub: user_id.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: Utc::now().timestamp(),
        };

        let token = sign_with_secret(&claims, &JwtConfig::secret())?;

        self.user_repo.push_token(&user_id, &token).await?;

        Ok(token)
    }

    /// 세션 토큰 검증 및 소유 사용자 해석
    ///
    /// 다음 순서로 검증합니다:
    ///
    /// 1. 서명 검증 — 위조되었거나 형식이 잘못된 토큰 거부
    /// 2. `sub` 클레임의 사용자 존재 확인
    /// 3. 사용자의 현재 토큰 목록에 이 토큰이 있는지 확인 — 이미
    ///    철회된 토큰 거부
    ///
    /// 실패 사유는 구분 없이 동일한 인증 에러로 보고됩니다.
    pub async fn validate(&self, token: &str) -> Result<User, AppError> {
        let claims = verify_with_secret(token, &JwtConfig::secret())?;

        let user = self
            .user_repo
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(invalid_token)?;

        if !user.has_token(token) {
            return Err(invalid_token());
        }

        Ok(user)
    }

    /// 사용자의 토큰 목록에서 정확히 일치하는 토큰 하나를 철회
    ///
    /// 이미 철회된 토큰에 대해서도 성공으로 처리됩니다 (멱등).
    pub async fn revoke(&self, user: &User, token: &str) -> Result<(), AppError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        self.user_repo.pull_token(&user_id, token).await
    }

    /// 사용자의 모든 세션 토큰 철회
    pub async fn revoke_all(&self, user: &User) -> Result<(), AppError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        self.user_repo.clear_tokens(&user_id).await
    }

    /// Authorization 헤더 값에서 스킴 접두사를 제거한 토큰 부분 추출
    ///
    /// "Bearer {token}" 형식이면 접두사를 제거하고, 접두사가 없으면
    /// 헤더 값 전체를 토큰으로 취급합니다.
    pub fn extract_bearer_token(auth_header: &str) -> &str {
        auth_header
            .strip_prefix("Bearer ")
            .unwrap_or(auth_header)
            .trim()
    }
}

/// 클레임에 HMAC-SHA256 서명하여 토큰 문자열 생성
fn sign_with_secret(claims: &TokenClaims, secret: &str) -> Result<String, AppError> {
    let header = Header::default();
    let encoding_key = EncodingKey::from_secret(secret.as_ref());

    encode(&header, claims, &encoding_key)
        .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
}

/// 토큰 서명 검증 및 클레임 추출
///
/// 이 설계의 토큰에는 `exp` 클레임이 없으므로 만료 검증은 비활성화합니다.
/// 세션은 철회로만 종료됩니다.
fn verify_with_secret(token: &str, secret: &str) -> Result<TokenClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(secret.as_ref());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<TokenClaims>(token, &decoding_key, &validation)
        .map(|token_data| token_data.claims)
        .map_err(|_| invalid_token())
}

/// 포괄적인 토큰 거부 에러
///
/// 위조, 형식 오류, 철회됨 중 어느 단계에서 실패했는지 노출하지 않습니다.
fn invalid_token() -> AppError {
    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    fn sample_claims(sub: &str) -> TokenClaims {
        TokenClaims {
            sub: sub.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: Utc::now().timestamp(),
        }
    }

    #[test]
    fn test_sign_verify_round_trip() {
        let claims = sample_claims("507f1f77bcf86cd799439011");
        let token = sign_with_secret(&claims, SECRET).unwrap();

        let verified = verify_with_secret(&token, SECRET).unwrap();

        assert_eq!(verified.sub, "507f1f77bcf86cd799439011");
        assert_eq!(verified.jti, claims.jti);
    }

    #[test]
    fn test_forged_signature_rejected() {
        let claims = sample_claims("507f1f77bcf86cd799439011");
        let token = sign_with_secret(&claims, "attacker-secret").unwrap();

        let err = verify_with_secret(&token, SECRET).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let err = verify_with_secret("not.a.token", SECRET).unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_concurrent_issues_produce_distinct_tokens() {
        // 같은 사용자, 같은 초에 서명해도 jti가 달라 토큰 값이 다르다
        let token_a = sign_with_secret(&sample_claims("same-user"), SECRET).unwrap();
        let token_b = sign_with_secret(&sample_claims("same-user"), SECRET).unwrap();

        assert_ne!(token_a, token_b);
    }

    #[test]
    fn test_extract_bearer_token_strips_scheme() {
        assert_eq!(
            TokenService::extract_bearer_token("Bearer abc.def.ghi"),
            "abc.def.ghi"
        );
        assert_eq!(TokenService::extract_bearer_token("abc.def.ghi"), "abc.def.ghi");
    }
}
