//! 상품 리포지토리 구현
//!
//! 상품 컬렉션의 목록 조회와 생성만 지원하는 순수 CRUD 저장소입니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::db::Database;
use crate::domain::entities::products::product::Product;
use crate::errors::errors::AppError;

const COLLECTION_NAME: &str = "products";

/// 상품 데이터 액세스 리포지토리
pub struct ProductRepository {
    db: Arc<Database>,
}

impl ProductRepository {
    /// 새 리포지토리 생성
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> mongodb::Collection<Product> {
        self.db
            .get_database()
            .collection::<Product>(COLLECTION_NAME)
    }

    /// 전체 상품 조회
    pub async fn find_all(&self) -> Result<Vec<Product>, AppError> {
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

    /// 새 상품 생성
    pub async fn create(&self, mut product: Product) -> Result<Product, AppError> {
        let result = self
            .collection()
            .insert_one(&product)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        product.id = result.inserted_id.as_object_id();

        Ok(product)
    }
}
