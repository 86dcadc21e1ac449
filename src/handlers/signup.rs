//! # Sign-Up HTTP Handler
//!
//! 회원가입 엔드포인트를 처리하는 핸들러입니다.
//! 요청 본문을 원본 JSON 그대로 서비스에 전달하여, 필드 존재 여부까지
//! 검증 체인이 판단하도록 합니다 (타입 역직렬화를 먼저 수행하면 누락
//! 필드가 프레임워크 에러로 가려집니다).

use actix_web::{HttpResponse, post, web};
use serde_json::Value;

use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::services::signup::SignUpService;

/// 회원가입 핸들러
///
/// 새로운 계정을 생성합니다. 필수 필드 존재 여부와 이메일 형식을
/// 검증 체인으로 확인한 뒤 생성된 계정 정보를 반환합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/signup`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "any_name",
///   "email": "any_email@email.com",
///   "password": "any_password",
///   "passwordConfirmation": "any_password"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "4f9b8d6e-....",
///   "name": "any_name",
///   "email": "any_email@email.com",
///   "created_at": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 필수 필드 누락 (400 Bad Request)
/// ```json
/// {
///   "name": "MissingParamError",
///   "message": "Missing param: name"
/// }
/// ```
///
/// ## 이메일 형식 오류 (400 Bad Request)
/// ```json
/// {
///   "name": "InvalidParamError",
///   "message": "Invalid param: email"
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/signup \
///   -H "Content-Type: application/json" \
///   -d '{
///     "name": "any_name",
///     "email": "any_email@email.com",
///     "password": "any_password",
///     "passwordConfirmation": "any_password"
///   }'
/// ```
#[post("")]
pub async fn sign_up(payload: web::Json<Value>) -> Result<HttpResponse, AppError> {
    let service = ServiceLocator::get::<SignUpService>();
    let response = service.sign_up(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
