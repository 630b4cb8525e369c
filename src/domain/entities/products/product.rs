//! Product Entity Implementation
//!
//! 상품 엔티티입니다. 생명주기 상태 없이 순수 데이터 레코드로 취급됩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 상품 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 상품 이름
    pub name: String,
    /// 상품 설명 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 가격
    pub price: f64,
    /// 배송비 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<f64>,
}

impl Product {
    /// 새 상품 생성
    pub fn new(name: String, description: Option<String>, price: f64, delivery: Option<f64>) -> Self {
        Self {
            id: None,
            name,
            description,
            price,
            delivery,
        }
    }
}
