//! 필드 일치 검증

use serde_json::{Map, Value};

use crate::core::errors::ValidationError;
use crate::services::validation::validation::Validation;

/// 두 필드의 값이 일치하는지 검사하는 검증
///
/// 비밀번호와 비밀번호 확인처럼 서로 같아야 하는 필드 쌍에 사용합니다.
/// 값이 다르면 비교 대상 필드(`field_to_compare`)를 가리키는
/// [`ValidationError::InvalidParam`]을 보고합니다.
pub struct CompareFieldsValidation {
    field_name: String,
    field_to_compare: String,
}

impl CompareFieldsValidation {
    /// 기준 필드와 비교 대상 필드 이름으로 검증을 생성합니다.
    pub fn new(field_name: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_to_compare: field_to_compare.into(),
        }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &Map<String, Value>) -> Option<ValidationError> {
        if input.get(&self.field_name) != input.get(&self.field_to_compare) {
            Some(ValidationError::invalid(&self.field_to_compare))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sut() -> CompareFieldsValidation {
        CompareFieldsValidation::new("password", "passwordConfirmation")
    }

    fn input_of(password: &str, confirmation: &str) -> Map<String, Value> {
        let mut input = Map::new();
        input.insert("password".to_string(), Value::String(password.to_string()));
        input.insert(
            "passwordConfirmation".to_string(),
            Value::String(confirmation.to_string()),
        );
        input
    }

    #[test]
    fn test_reports_invalid_param_when_fields_differ() {
        let sut = make_sut();

        let error = sut.validate(&input_of("any_password", "other_password"));

        assert_eq!(
            error,
            Some(ValidationError::invalid("passwordConfirmation"))
        );
    }

    #[test]
    fn test_passes_when_fields_match() {
        let sut = make_sut();

        let error = sut.validate(&input_of("any_password", "any_password"));

        assert_eq!(error, None);
    }
}
