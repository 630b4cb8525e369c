//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 검증은 예외가 아닌 타입화된 필드별 에러 목록을 반환하므로,
/// 호출자가 에러 종류를 구분할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이름 (공백만으로는 불가)
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 7자, "password" 포함 불가)
    #[validate(length(min = 7, message = "비밀번호는 최소 7자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_policy"))]
    pub password: String,

    /// 전화번호 (숫자만)
    pub phone: i64,
}

/// 이름이 공백을 제외하고 비어있지 않은지 검증
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name")
            .with_message("이름은 비워둘 수 없습니다".into()));
    }
    Ok(())
}

/// 비밀번호 정책 검증 ("password" 문자열 포함 금지, 대소문자 무관)
fn validate_password_policy(password: &str) -> Result<(), ValidationError> {
    if password.to_lowercase().contains("password") {
        return Err(ValidationError::new("forbidden_password")
            .with_message("비밀번호에 \"password\"를 포함할 수 없습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "secret12".to_string(),
            phone: 555,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_short_password_rejected() {
        let mut req = valid_request();
        req.password = "abc123".to_string(); // 6자

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_seven_char_password_accepted() {
        let mut req = valid_request();
        req.password = "abcd123".to_string();

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_password_containing_password_rejected() {
        let mut req = valid_request();
        req.password = "myPassWord1".to_string();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut req = valid_request();
        req.name = "   ".to_string();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_non_numeric_phone_fails_deserialization() {
        let body = serde_json::json!({
            "name": "Alice",
            "email": "a@x.com",
            "password": "secret12",
            "phone": "five-five-five"
        });

        assert!(serde_json::from_value::<CreateUserRequest>(body).is_err());
    }
}
