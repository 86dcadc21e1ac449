//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 회원가입 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 회원가입 API 엔드포인트 (Public, 인증 불필요)
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_signup_routes(cfg);
}

/// 회원가입 관련 라우트를 설정합니다
///
/// 회원가입은 계정을 만들기 위한 엔드포인트이므로 인증 없이 접근
/// 가능한 Public 라우트로 등록합니다.
///
/// # Available Routes
///
/// - `POST /api/v1/signup` - 회원가입 (계정 생성)
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/signup \
///   -H "Content-Type: application/json" \
///   -d '{"name":"any_name","email":"any_email@email.com","password":"any_password","passwordConfirmation":"any_password"}'
/// ```
fn configure_signup_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/signup")
            .service(handlers::signup::sign_up)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `features`: 사용 중인 기술 스택
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "signup_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "validation": "Composite Validation Chain",
///     "dependency_injection": "ServiceLocator"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "signup_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "validation": "Composite Validation Chain",
            "dependency_injection": "ServiceLocator"
        }
    }))
}
