//! Product HTTP Handlers
//!
//! 상품 리소스의 목록 조회와 생성 엔드포인트입니다.
//! 인증이 필요 없으며, 스토어 스키마 수준 이상의 검증은 수행하지
//! 않습니다. 스토어 오류는 500으로 보고됩니다.

use actix_web::{HttpResponse, get, post, web};

use crate::domain::dto::products::request::CreateProductRequest;
use crate::domain::dto::products::response::ProductResponse;
use crate::domain::entities::products::product::Product;
use crate::errors::errors::AppError;
use crate::state::AppState;

/// 전체 상품 목록 조회 핸들러
#[get("")]
pub async fn get_products(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.product_repo.find_all().await {
        Ok(products) => {
            let body: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            Ok(HttpResponse::Ok().json(body))
        }
        Err(e) => {
            log::error!("상품 목록 조회 실패: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}

/// 상품 생성 핸들러
///
/// 성공 시 201과 ID가 할당된 상품을 반환합니다.
///
/// 본문은 JSON 값으로 먼저 수신되므로, 구문이 깨진 JSON만 400이고
/// 필수 필드 누락 같은 스토어 스키마 위반은 저장 실패와 동일하게
/// 500으로 보고됩니다.
#[post("")]
pub async fn create_product(
    state: web::Data<AppState>,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    let product = match parse_product_payload(payload.into_inner()) {
        Ok(product) => product,
        Err(e) => {
            log::error!("상품 생성 실패: {}", e);
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    match state.product_repo.create(product).await {
        Ok(created) => Ok(HttpResponse::Created().json(ProductResponse::from(created))),
        Err(e) => {
            log::error!("상품 생성 실패: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}

/// JSON 값을 상품 엔티티로 변환
///
/// 필수 필드 누락이나 타입 불일치는 스토어 스키마 위반으로 취급되어
/// `InternalError`(500)로 보고됩니다.
fn parse_product_payload(value: serde_json::Value) -> Result<Product, AppError> {
    let request: CreateProductRequest = serde_json::from_value(value)
        .map_err(|e| AppError::InternalError(format!("상품 스키마 위반: {}", e)))?;

    Ok(Product::from(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_missing_required_field_reported_as_internal_error() {
        let body = serde_json::json!({ "name": "Widget" });

        let err = parse_product_payload(body).unwrap_err();

        assert!(matches!(err, AppError::InternalError(_)));
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wrong_field_type_reported_as_internal_error() {
        let body = serde_json::json!({ "name": "Widget", "price": "nine" });

        let err = parse_product_payload(body).unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[test]
    fn test_complete_payload_parses() {
        let body = serde_json::json!({
            "name": "Widget",
            "price": 9.99,
            "delivery": 2.5
        });

        let product = parse_product_payload(body).unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.delivery, Some(2.5));
    }
}
