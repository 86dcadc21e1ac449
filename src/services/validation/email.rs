//! 이메일 형식 검증
//!
//! 이메일 문자열 검사 능력([`EmailValidator`])과 이를 입력 레코드의
//! 특정 필드에 적용하는 검증([`EmailFieldValidation`])을 제공합니다.

use std::sync::Arc;

use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::core::errors::ValidationError;
use crate::services::validation::validation::Validation;

/// 이메일 문자열 검사 능력 인터페이스
///
/// 이메일 주소를 받아 형식이 유효한지 여부만 보고하는 상태 없는
/// 능력 객체입니다. 테스트에서는 동일 trait을 구현한 스텁으로 대체합니다.
pub trait EmailValidator: Send + Sync {
    /// 주어진 이메일 주소의 형식이 유효하면 `true`를 반환합니다.
    fn is_valid(&self, email: &str) -> bool;
}

/// `validator` 크레이트 기반 이메일 검사기
///
/// RFC 스타일의 이메일 형식 검사를 수행하는 기본 구현체입니다.
/// 순수 문자열 검사이므로 I/O가 발생하지 않습니다.
pub struct ValidatorEmailValidator;

impl EmailValidator for ValidatorEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        email.validate_email()
    }
}

/// 입력 레코드의 특정 필드를 이메일로 검증
///
/// 필드 값을 문자열로 읽어 [`EmailValidator`]에 위임합니다.
/// 검사기가 `false`를 보고하거나 값이 문자열이 아니면
/// [`ValidationError::InvalidParam`]을 반환합니다.
pub struct EmailFieldValidation {
    field_name: String,
    email_validator: Arc<dyn EmailValidator>,
}

impl EmailFieldValidation {
    /// 검사할 필드 이름과 이메일 검사기로 검증을 생성합니다.
    pub fn new(field_name: impl Into<String>, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            field_name: field_name.into(),
            email_validator,
        }
    }
}

impl Validation for EmailFieldValidation {
    fn validate(&self, input: &Map<String, Value>) -> Option<ValidationError> {
        let is_valid = input
            .get(&self.field_name)
            .and_then(Value::as_str)
            .map(|email| self.email_validator.is_valid(email))
            .unwrap_or(false);

        if is_valid {
            None
        } else {
            Some(ValidationError::invalid(&self.field_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// 고정된 판정을 반환하면서 전달받은 이메일을 기록하는 스텁
    struct EmailValidatorStub {
        is_valid: bool,
        received: Mutex<Option<String>>,
    }

    impl EmailValidatorStub {
        fn new(is_valid: bool) -> Arc<Self> {
            Arc::new(Self {
                is_valid,
                received: Mutex::new(None),
            })
        }
    }

    impl EmailValidator for EmailValidatorStub {
        fn is_valid(&self, email: &str) -> bool {
            *self.received.lock().unwrap() = Some(email.to_string());
            self.is_valid
        }
    }

    fn input_with_email(email: &str) -> Map<String, Value> {
        let mut input = Map::new();
        input.insert("email".to_string(), Value::String(email.to_string()));
        input
    }

    #[test]
    fn test_reports_invalid_param_when_validator_rejects() {
        let stub = EmailValidatorStub::new(false);
        let sut = EmailFieldValidation::new("email", stub);

        let error = sut.validate(&input_with_email("invalid_email@email.com"));

        assert_eq!(error, Some(ValidationError::invalid("email")));
    }

    #[test]
    fn test_passes_when_validator_accepts() {
        let stub = EmailValidatorStub::new(true);
        let sut = EmailFieldValidation::new("email", stub);

        let error = sut.validate(&input_with_email("any_email@email.com"));

        assert_eq!(error, None);
    }

    #[test]
    fn test_calls_validator_with_supplied_email() {
        let stub = EmailValidatorStub::new(true);
        let sut = EmailFieldValidation::new("email", stub.clone());

        sut.validate(&input_with_email("any_email@email.com"));

        assert_eq!(
            stub.received.lock().unwrap().as_deref(),
            Some("any_email@email.com")
        );
    }

    #[test]
    fn test_reports_invalid_param_for_non_string_value() {
        let stub = EmailValidatorStub::new(true);
        let sut = EmailFieldValidation::new("email", stub);

        let mut input = Map::new();
        input.insert("email".to_string(), Value::from(42));

        assert_eq!(
            sut.validate(&input),
            Some(ValidationError::invalid("email"))
        );
    }

    #[test]
    fn test_validator_email_validator_accepts_well_formed_address() {
        let sut = ValidatorEmailValidator;

        assert!(sut.is_valid("any_email@email.com"));
    }

    #[test]
    fn test_validator_email_validator_rejects_malformed_address() {
        let sut = ValidatorEmailValidator;

        assert!(!sut.is_valid("not-an-email"));
        assert!(!sut.is_valid(""));
    }
}
