//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//! 등록, 자격 증명 검증, 조회, 삭제를 담당합니다.
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 비밀번호는 솔트된 단방향 해시로만 저장되며,
//!   검증은 bcrypt의 상수 시간 비교를 사용합니다. 저장된 값과 제출된
//!   값의 평문 비교는 어떤 경로에도 존재하지 않습니다.
//! - **열거 방지**: 자격 증명 검증 실패는 "없는 이메일"과 "잘못된
//!   비밀번호"를 구분하지 않고 동일한 에러로 보고됩니다.
//! - **민감 정보 제거**: 외부 노출 전 DTO 변환에서 비밀번호 해시와
//!   토큰 목록이 제거됩니다.

use bcrypt::{hash, verify};
use std::sync::Arc;

use crate::config::PasswordConfig;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use crate::repositories::users::user_repo::UserRepository;

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 사용자 서비스 생성
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 계정 등록
    ///
    /// 요청 필드 검증은 핸들러에서 수행된 상태라고 가정합니다.
    /// 비밀번호를 환경별 cost의 bcrypt로 해시한 뒤 저장하며,
    /// 이메일 중복은 리포지토리에서 `ValidationError`로 보고됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이메일 중복
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    /// * `AppError::DatabaseError` - 저장 실패
    pub async fn register(&self, request: CreateUserRequest) -> Result<User, AppError> {
        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let user = User::new(request.name, request.email, password_hash, request.phone);

        self.user_repo.create(user).await
    }

    /// 이메일/비밀번호 자격 증명으로 사용자 조회
    ///
    /// 사용자가 없거나 비밀번호가 일치하지 않으면 **동일한** 포괄적
    /// 에러를 반환합니다. 어느 검증이 실패했는지는 노출되지 않습니다.
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user = self.user_repo.find_by_email(email).await?;

        check_password(user, password)
    }

    /// 전체 사용자의 공개 뷰 목록 조회
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자 계정 삭제
    ///
    /// 소유한 세션 토큰은 사용자 문서에 내장되어 있으므로 함께
    /// 제거됩니다.
    pub async fn delete_account(&self, user: &User) -> Result<(), AppError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        self.user_repo.delete(&user_id).await?;

        Ok(())
    }

    /// 사용자 컬렉션 인덱스 생성 (초기화 시점에 한 번 호출)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        self.user_repo.create_indexes().await
    }
}

/// 조회 결과와 제출된 비밀번호를 대조
///
/// 검증 결과를 실제로 호출하고 그 불리언 결과를 전파합니다.
/// 두 실패 경로 모두 [`login_rejected`]와 동일한 에러를 반환하여
/// 사용자 열거를 방지합니다.
fn check_password(user: Option<User>, password: &str) -> Result<User, AppError> {
    let user = user.ok_or_else(login_rejected)?;

    let is_match = verify(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

    if !is_match {
        return Err(login_rejected());
    }

    Ok(user)
}

/// 포괄적인 로그인 거부 에러
fn login_rejected() -> AppError {
    AppError::AuthenticationError("로그인할 수 없습니다".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 테스트 전용 최소 cost 해시
    fn hashed(password: &str) -> String {
        hash(password, 4).unwrap()
    }

    fn user_with_password(password: &str) -> User {
        User::new(
            "Alice".to_string(),
            "a@x.com".to_string(),
            hashed(password),
            555,
        )
    }

    #[test]
    fn test_correct_password_accepted() {
        let user = user_with_password("secret12");

        let found = check_password(Some(user), "secret12").unwrap();
        assert_eq!(found.email, "a@x.com");
    }

    #[test]
    fn test_wrong_password_rejected() {
        let user = user_with_password("secret12");

        let err = check_password(Some(user), "wrong-pass").unwrap_err();
        assert!(matches!(err, AppError::AuthenticationError(_)));
    }

    #[test]
    fn test_unknown_user_and_wrong_password_fail_identically() {
        // 열거 방지: 두 실패 경로의 에러 메시지가 완전히 동일해야 한다
        let user = user_with_password("secret12");

        let missing_user_err = check_password(None, "secret12").unwrap_err();
        let wrong_password_err = check_password(Some(user), "wrong-pass").unwrap_err();

        assert_eq!(missing_user_err.to_string(), wrong_password_err.to_string());
    }

    #[test]
    fn test_stored_secret_is_not_plaintext() {
        let user = user_with_password("secret12");

        assert_ne!(user.password_hash, "secret12");
        assert!(user.password_hash.starts_with("$2"));
    }
}
