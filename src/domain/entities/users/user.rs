//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/비밀번호 기반 로컬 인증과 다중 기기 세션 토큰 목록을 지원합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자가 소유한 세션 토큰 레코드
///
/// 발급된 토큰은 사용자 문서에 내장된 배열로 저장됩니다.
/// 토큰이 이 목록에 존재하는 동안에만 유효하며,
/// 로그아웃 시 목록에서 제거되는 화이트리스트 방식입니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionToken {
    pub token: String,
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 비밀번호는 bcrypt 해시로만 저장되며, 해시와 토큰 목록은
/// 어떤 외부 표현으로도 직렬화되지 않습니다 (DTO 변환 시 제거).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (공백 제거됨)
    pub name: String,
    /// 사용자 이메일 (unique, 소문자 저장)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 전화번호 (숫자)
    pub phone: i64,
    /// 현재 유효한 세션 토큰 목록 (다중 기기 로그인 지원)
    #[serde(default)]
    pub tokens: Vec<SessionToken>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 이름은 앞뒤 공백이 제거되고 이메일은 소문자로 정규화됩니다.
    /// 비밀번호는 이미 해시된 값이어야 합니다.
    pub fn new(name: String, email: String, password_hash: String, phone: i64) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            password_hash,
            phone,
            tokens: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 토큰이 현재 유효한 토큰 목록에 존재하는지 확인
    pub fn has_token(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t.token == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "  Alice ".to_string(),
            " Alice@Example.COM ".to_string(),
            "$2b$04$fakehash".to_string(),
            5551234,
        )
    }

    #[test]
    fn test_new_normalizes_name_and_email() {
        let user = sample_user();

        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(user.tokens.is_empty());
        assert!(user.id.is_none());
    }

    #[test]
    fn test_has_token_membership() {
        let mut user = sample_user();
        user.tokens.push(SessionToken {
            token: "token-a".to_string(),
        });
        user.tokens.push(SessionToken {
            token: "token-b".to_string(),
        });

        assert!(user.has_token("token-a"));
        assert!(user.has_token("token-b"));
        assert!(!user.has_token("token-c"));
    }

    #[test]
    fn test_revoked_token_no_longer_matches() {
        let mut user = sample_user();
        user.tokens.push(SessionToken {
            token: "token-a".to_string(),
        });
        user.tokens.push(SessionToken {
            token: "token-b".to_string(),
        });

        // 단일 토큰 제거 후에는 해당 토큰만 무효
        user.tokens.retain(|t| t.token != "token-a");
        assert!(!user.has_token("token-a"));
        assert!(user.has_token("token-b"));

        // 전체 제거 후에는 모든 토큰 무효
        user.tokens.clear();
        assert!(!user.has_token("token-b"));
    }
}
