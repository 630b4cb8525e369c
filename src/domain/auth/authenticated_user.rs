//! 요청 스코프 인증 컨텍스트

use crate::domain::entities::users::user::User;

/// 인증 게이트를 통과한 요청에 부착되는 사용자 컨텍스트
///
/// 인증 미들웨어가 토큰 검증에 성공하면 Request Extensions에 삽입되며,
/// 다운스트림 핸들러가 사용자와 함께 **이번 요청에 사용된 토큰**에
/// 접근할 수 있게 합니다. 로그아웃은 전체 토큰이 아닌 바로 그 토큰만
/// 철회해야 하므로 토큰 값을 함께 보관합니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 토큰으로 해석된 사용자
    pub user: User,
    /// 이번 요청에 제시된 토큰 (Bearer 접두사 제거됨)
    pub token: String,
}
