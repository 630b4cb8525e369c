//! 사용자 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 공개 응답 DTO
///
/// 엔티티를 외부 표현으로 변환합니다. `password_hash`와 `tokens` 필드는
/// 구조체에 존재하지 않으므로 어떤 경로로도 직렬화될 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            phone,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            phone,
            created_at,
            updated_at,
        }
    }
}

/// 토큰이 포함된 인증 응답 DTO
///
/// 회원가입(201)과 로그인(200) 응답에 공통으로 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            user: UserResponse::from(user),
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::SessionToken;

    #[test]
    fn test_externalized_user_never_exposes_secrets() {
        let mut user = User::new(
            "Alice".to_string(),
            "a@x.com".to_string(),
            "$2b$04$secret-hash".to_string(),
            555,
        );
        user.tokens.push(SessionToken {
            token: "live-token".to_string(),
        });

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("password_hash"));
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("tokens"));
        assert_eq!(object["email"], "a@x.com");
    }

    #[test]
    fn test_auth_response_shape() {
        let user = User::new(
            "Bob".to_string(),
            "b@x.com".to_string(),
            "$2b$04$hash".to_string(),
            777,
        );

        let value =
            serde_json::to_value(AuthResponse::new(user, "issued-token".to_string())).unwrap();

        assert_eq!(value["token"], "issued-token");
        assert_eq!(value["user"]["email"], "b@x.com");
        assert!(value["user"].get("tokens").is_none());
    }
}
