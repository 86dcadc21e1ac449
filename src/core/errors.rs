//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 회원가입 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! | 에러 | HTTP Status | 와이어 이름 |
//! |------|-------------|-------------|
//! | `ValidationError::MissingParam` | 400 Bad Request | `MissingParamError` |
//! | `ValidationError::InvalidParam` | 400 Bad Request | `InvalidParamError` |
//! | `AppError::Internal` | 500 Internal Server Error | `ServerError` |
//!
//! 모든 에러 응답은 다음과 같은 표준 JSON 형식을 따릅니다:
//!
//! ```json
//! {
//!   "name": "MissingParamError",
//!   "message": "Missing param: email"
//! }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ValidationError};
//!
//! fn check_name(name: Option<&str>) -> Result<(), AppError> {
//!     match name {
//!         None => Err(ValidationError::missing("name").into()),
//!         Some(_) => Ok(()),
//!     }
//! }
//! ```

use thiserror::Error;

/// 클라이언트 입력 검증 에러
///
/// 요청 본문의 필드 검증에 실패했을 때 발생하는 에러 열거형입니다.
/// 두 변형 모두 결정적인 검증 실패이며 400 Bad Request로 응답됩니다.
/// 어떤 필드가 문제였는지를 변형에 함께 담아 전달합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 필수 필드 누락 (필드가 없거나 비어 있음)
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// 필드는 존재하지만 값이 형식 검증에 실패함
    #[error("Invalid param: {0}")]
    InvalidParam(String),
}

impl ValidationError {
    /// 누락 필드 에러를 생성합니다.
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingParam(field.into())
    }

    /// 잘못된 필드 에러를 생성합니다.
    pub fn invalid(field: impl Into<String>) -> Self {
        ValidationError::InvalidParam(field.into())
    }

    /// 에러 응답 본문에 실리는 와이어 이름을 반환합니다.
    pub fn name(&self) -> &'static str {
        match self {
            ValidationError::MissingParam(_) => "MissingParamError",
            ValidationError::InvalidParam(_) => "InvalidParamError",
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// 에러 응답 본문에 실리는 와이어 이름을 반환합니다.
    fn wire_name(&self) -> &'static str {
        match self {
            AppError::Validation(e) => e.name(),
            AppError::Internal(_) => "ServerError",
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 `{name, message}` 형식의
    /// JSON 응답으로 변환합니다. 검증 에러는 변형이 가진 필드 이름을
    /// 그대로 메시지에 노출하고, 내부 에러는 500으로 매핑합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "name": self.wire_name(),
                "message": self.to_string(),
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
