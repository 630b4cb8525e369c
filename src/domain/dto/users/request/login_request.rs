//! 로그인 요청 DTO

use serde::{Deserialize, Serialize};

/// 이메일/비밀번호 로그인 요청
///
/// 별도의 필드 검증을 수행하지 않습니다. 잘못된 값은 자격 증명 조회
/// 단계에서 포괄적인 로그인 실패로 처리됩니다 (사용자 열거 방지).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
