//! 상품 생성 요청 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::products::product::Product;

/// 상품 생성 요청
///
/// 스토어 스키마 수준의 필수 필드(name, price)는 역직렬화 단계에서
/// 강제되며, 그 외 추가 검증은 수행하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub delivery: Option<f64>,
}

impl From<CreateProductRequest> for Product {
    fn from(request: CreateProductRequest) -> Self {
        Product::new(
            request.name,
            request.description,
            request.price,
            request.delivery,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_maps_to_entity() {
        let request = CreateProductRequest {
            name: "Widget".to_string(),
            description: None,
            price: 9.99,
            delivery: Some(2.5),
        };

        let product = Product::from(request);

        assert!(product.id.is_none());
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.delivery, Some(2.5));
    }

    #[test]
    fn test_missing_required_field_fails_deserialization() {
        let body = serde_json::json!({ "name": "Widget" });

        assert!(serde_json::from_value::<CreateProductRequest>(body).is_err());
    }
}
