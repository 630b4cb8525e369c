//! 상품 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::products::product::Product;

/// 상품 공개 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<f64>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let Product {
            id,
            name,
            description,
            price,
            delivery,
        } = product;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            description,
            price,
            delivery,
        }
    }
}
