//! 회원가입 검증 체인 팩토리
//!
//! 회원가입 요청에 적용되는 검증 시퀀스를 한 곳에서 조립합니다.
//! 서버 시작 시 한 번 호출되어 만들어진 컴포지트가 모든 요청에서
//! 재사용됩니다.

use std::sync::Arc;

use crate::services::validation::compare_fields::CompareFieldsValidation;
use crate::services::validation::composite::ValidationComposite;
use crate::services::validation::email::{EmailFieldValidation, EmailValidator};
use crate::services::validation::required_field::RequiredFieldValidation;
use crate::services::validation::validation::Validation;

/// 회원가입 필수 필드 (검사 순서 고정)
pub const SIGNUP_REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

/// 회원가입 검증 컴포지트를 조립합니다.
///
/// 검증 순서:
/// 1. 필수 필드 존재 검사 — `name`, `email`, `password`,
///    `passwordConfirmation` 순서로, 첫 누락 필드에서 중단
/// 2. `email` 필드 형식 검사 (주입된 [`EmailValidator`]에 위임)
/// 3. `password` / `passwordConfirmation` 일치 검사
pub fn make_signup_validation(email_validator: Arc<dyn EmailValidator>) -> ValidationComposite {
    let mut validations: Vec<Box<dyn Validation>> = Vec::new();

    for field in SIGNUP_REQUIRED_FIELDS {
        validations.push(Box::new(RequiredFieldValidation::new(field)));
    }
    validations.push(Box::new(EmailFieldValidation::new("email", email_validator)));
    validations.push(Box::new(CompareFieldsValidation::new(
        "password",
        "passwordConfirmation",
    )));

    ValidationComposite::new(validations)
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::*;
    use crate::core::errors::ValidationError;
    use crate::services::validation::email::ValidatorEmailValidator;

    fn make_sut() -> ValidationComposite {
        make_signup_validation(Arc::new(ValidatorEmailValidator))
    }

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_first_missing_field_wins_in_declared_order() {
        let sut = make_sut();

        let error = sut.validate(&Map::new());

        assert_eq!(error, Some(ValidationError::missing("name")));
    }

    #[test]
    fn test_reports_missing_password_confirmation() {
        let sut = make_sut();
        let input = as_map(json!({
            "name": "any_name",
            "email": "any_email@email.com",
            "password": "any_password",
        }));

        let error = sut.validate(&input);

        assert_eq!(
            error,
            Some(ValidationError::missing("passwordConfirmation"))
        );
    }

    #[test]
    fn test_reports_invalid_email_after_presence_checks() {
        let sut = make_sut();
        let input = as_map(json!({
            "name": "any_name",
            "email": "not-an-email",
            "password": "any_password",
            "passwordConfirmation": "any_password",
        }));

        let error = sut.validate(&input);

        assert_eq!(error, Some(ValidationError::invalid("email")));
    }

    #[test]
    fn test_reports_password_mismatch() {
        let sut = make_sut();
        let input = as_map(json!({
            "name": "any_name",
            "email": "any_email@email.com",
            "password": "any_password",
            "passwordConfirmation": "other_password",
        }));

        let error = sut.validate(&input);

        assert_eq!(
            error,
            Some(ValidationError::invalid("passwordConfirmation"))
        );
    }

    #[test]
    fn test_passes_for_a_complete_valid_request() {
        let sut = make_sut();
        let input = as_map(json!({
            "name": "any_name",
            "email": "any_email@email.com",
            "password": "any_password",
            "passwordConfirmation": "any_password",
        }));

        assert_eq!(sut.validate(&input), None);
    }
}
