//! 세션 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임 중 이 설계에 필요한 최소 집합만 사용합니다.

use serde::{Deserialize, Serialize};

/// 세션 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `jti`: 토큰 고유 식별자 (UUID v4) — 같은 사용자에게 동시에 발급된
///   토큰들도 서로 다른 값이 되도록 보장합니다
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
///
/// `exp` 클레임은 의도적으로 없습니다. 세션은 만료가 아니라
/// 철회(로그아웃)로만 종료됩니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    /// 토큰 고유 식별자
    pub jti: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
}
