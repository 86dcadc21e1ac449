//! 회원가입 비즈니스 로직 서비스
//!
//! 회원가입 요청의 전체 흐름을 담당하는 서비스입니다.
//! Spring Framework의 `@Service`가 적용된 클래스와 유사한 역할을 수행하며,
//! 검증 체인을 실행하고 검증을 통과한 요청을 계정 응답으로 변환합니다.
//!
//! ## 처리 흐름
//!
//! 1. 요청 본문(JSON)을 key-value 레코드로 해석
//!    (객체가 아닌 본문은 빈 레코드로 취급)
//! 2. 회원가입 검증 컴포지트 실행 — 첫 실패에서 중단,
//!    실패 시 `400 Bad Request`로 매핑되는 [`ValidationError`] 반환
//! 3. 검증을 통과한 본문을 타입 있는 [`SignUpRequest`]로 역직렬화
//! 4. 생성된 계정 정보([`SignUpResponse`])를 반환
//!
//! ## 동시성
//!
//! 서비스와 보유한 검증 체인은 모두 상태가 없으므로, 하나의 인스턴스가
//! 모든 워커 스레드에서 동시에 재사용됩니다. 요청 간 공유 가변 상태는
//! 존재하지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use serde_json::{Map, Value};

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::Service;
use crate::domain::dto::signup::{SignUpRequest, SignUpResponse};
use crate::services::validation::{
    EmailValidator, Validation, ValidationComposite, ValidatorEmailValidator,
    make_signup_validation,
};

/// 회원가입 서비스
///
/// 생성 시점에 주입된 [`EmailValidator`]로 검증 체인을 조립해 보관합니다.
/// 테스트에서는 스텁 검사기를 주입하여 이메일 판정을 제어합니다.
pub struct SignUpService {
    /// 회원가입 요청에 적용되는 검증 시퀀스 (생성 시 고정)
    validation: ValidationComposite,
}

impl SignUpService {
    /// 주어진 이메일 검사기로 서비스를 생성합니다.
    pub fn new(email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            validation: make_signup_validation(email_validator),
        }
    }

    /// 회원가입 요청을 처리합니다.
    ///
    /// # Arguments
    ///
    /// * `body` - 요청 본문 원본 JSON
    ///
    /// # Returns
    ///
    /// * `Ok(SignUpResponse)` - 생성된 계정 정보
    /// * `Err(AppError::Validation)` - 필드 누락 또는 형식 검증 실패 (400)
    /// * `Err(AppError::Internal)` - 검증 통과 후 역직렬화 실패 (500, 결함)
    pub async fn sign_up(&self, body: Value) -> AppResult<SignUpResponse> {
        let input = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        if let Some(error) = self.validation.validate(&input) {
            debug!("회원가입 검증 실패: {}", error);
            return Err(error.into());
        }

        // 검증을 통과한 본문만 이 지점에 도달하므로 역직렬화 실패는 결함이다
        let request: SignUpRequest = serde_json::from_value(Value::Object(input))
            .map_err(|e| AppError::Internal(format!("Failed to decode sign-up request: {}", e)))?;

        let response = SignUpResponse::from(request);
        info!("✅ 새 계정 생성됨: id={}", response.id);

        Ok(response)
    }
}

impl Default for SignUpService {
    /// 기본 이메일 검사기([`ValidatorEmailValidator`])로 서비스를 생성합니다.
    fn default() -> Self {
        Self::new(Arc::new(ValidatorEmailValidator))
    }
}

#[async_trait]
impl Service for SignUpService {
    fn name(&self) -> &str {
        "signup"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        info!("🔧 회원가입 검증 체인 준비 완료");
        Ok(())
    }
}
