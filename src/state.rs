//! 애플리케이션 상태 구성
//!
//! 리포지토리와 서비스를 명시적으로 연결하는 의존성 주입 지점입니다.
//! 전역 싱글톤이나 서비스 로케이터 없이, `main`에서 생성된 상태가
//! `web::Data`를 통해 모든 핸들러와 미들웨어에 전달됩니다.
//! 덕분에 테스트에서는 독립된 스토어 인스턴스로 별도의 상태를
//! 구성할 수 있습니다.

use std::sync::Arc;

use crate::db::Database;
use crate::errors::errors::AppError;
use crate::repositories::products::product_repo::ProductRepository;
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::token_service::TokenService;
use crate::services::users::user_service::UserService;

/// 요청 처리에 필요한 모든 협력자를 담는 애플리케이션 상태
pub struct AppState {
    /// 사용자 등록/자격 증명/조회/삭제 서비스
    pub user_service: Arc<UserService>,
    /// 세션 토큰 발급/검증/철회 서비스
    pub token_service: Arc<TokenService>,
    /// 상품 스토어 (순수 CRUD이므로 서비스 계층 없이 직접 사용)
    pub product_repo: Arc<ProductRepository>,
}

impl AppState {
    /// 데이터베이스 핸들로부터 전체 의존성 그래프를 구성합니다.
    pub fn new(database: Arc<Database>) -> Self {
        let user_repo = Arc::new(UserRepository::new(database.clone()));
        let product_repo = Arc::new(ProductRepository::new(database));

        let token_service = Arc::new(TokenService::new(user_repo.clone()));
        let user_service = Arc::new(UserService::new(user_repo));

        Self {
            user_service,
            token_service,
            product_repo,
        }
    }

    /// 스토어 초기화 (인덱스 생성)
    ///
    /// 서버 기동 시점에 한 번 호출합니다.
    pub async fn initialize(&self) -> Result<(), AppError> {
        self.user_service.create_indexes().await
    }
}
