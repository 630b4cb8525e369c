//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하며, 이메일 유니크 제약과
//! 내장 토큰 배열에 대한 원자적 변경 연산을 제공합니다.
//!
//! ## 동시성 모델
//!
//! `$push`/`$pull`/`$set` 연산은 문서 단위로 원자적이지만, 같은 사용자에
//! 대한 동시 토큰 발급/철회 간의 순서는 스토어 계층의 last-write-wins에
//! 따릅니다. 낙관적 동시성 제어는 수행하지 않습니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::{
    IndexModel,
    bson::{DateTime, doc, oid::ObjectId},
    options::IndexOptions,
};

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;

/// 사용자 컬렉션 이름
const COLLECTION_NAME: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산과 세션 토큰 배열 변경을 담당합니다.
/// 모든 메서드는 `Result<T, AppError>`를 반환하며, 드라이버 오류는
/// `DatabaseError`로, 잘못된 ObjectId 형식은 `ValidationError`로
/// 변환됩니다.
pub struct UserRepository {
    /// 명시적으로 주입되는 MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    /// 새 리포지토리 생성
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 전체 사용자 조회
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 소문자로 저장되므로 조회 전에 정규화합니다.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.trim().to_lowercase();

        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 이메일 중복을 사전에 확인하고, 최종적으로는 유니크 인덱스가
    /// 중복을 차단합니다. 중복 이메일은 `ValidationError`(400)로
    /// 보고됩니다.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        reject_duplicate(self.find_by_email(&user.email).await?)?;

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자의 토큰 목록에 새 토큰 추가
    ///
    /// 기존 토큰들은 그대로 유지됩니다 (다중 기기 로그인).
    pub async fn push_token(&self, id: &str, token: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .update_one(
                doc! { "_id": object_id },
                doc! {
                    "$push": { "tokens": { "token": token } },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 사용자의 토큰 목록에서 정확히 일치하는 토큰 하나를 제거
    ///
    /// 토큰이 이미 없는 경우에도 성공으로 처리됩니다 (멱등).
    pub async fn pull_token(&self, id: &str, token: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .update_one(
                doc! { "_id": object_id },
                doc! {
                    "$pull": { "tokens": { "token": token } },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 사용자의 토큰 목록 전체 비우기
    pub async fn clear_tokens(&self, id: &str) -> Result<(), AppError> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .update_one(
                doc! { "_id": object_id },
                doc! {
                    "$set": { "tokens": [], "updated_at": DateTime::now() },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 사용자 삭제
    ///
    /// 세션 토큰은 사용자 문서에 내장되어 있으므로 함께 제거됩니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이메일 유니크 인덱스를 생성합니다. 애플리케이션 초기화 시점에
    /// 한 번 호출합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// ObjectId 문자열 파싱
fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// 이메일 중복 판정
///
/// 같은 이메일의 사용자가 이미 존재하면 `ValidationError`(400)로
/// 거부합니다. 이메일은 저장/조회 양쪽에서 소문자로 정규화되므로
/// 대소문자만 다른 이메일도 중복으로 판정됩니다.
fn reject_duplicate(existing: Option<User>) -> Result<(), AppError> {
    if existing.is_some() {
        return Err(AppError::ValidationError(
            "이미 사용 중인 이메일입니다".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_valid() {
        assert!(parse_object_id("507f1f77bcf86cd799439011").is_ok());
    }

    #[test]
    fn test_parse_object_id_invalid() {
        let err = parse_object_id("not-an-object-id").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    fn user_with_email(email: &str) -> User {
        User::new(
            "Alice".to_string(),
            email.to_string(),
            "$2b$04$hash".to_string(),
            555,
        )
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let err = reject_duplicate(Some(user_with_email("a@x.com"))).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_fresh_email_accepted() {
        assert!(reject_duplicate(None).is_ok());
    }

    #[test]
    fn test_case_insensitive_emails_collide() {
        // 정규화 후 두 이메일은 같은 키로 조회된다
        let first = user_with_email("Alice@X.com");
        let second = user_with_email("alice@x.com");
        assert_eq!(first.email, second.email);

        // 따라서 두 번째 등록은 중복으로 거부된다
        let err = reject_duplicate(Some(first)).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
