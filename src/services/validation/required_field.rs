//! 필수 필드 존재 검증

use serde_json::{Map, Value};

use crate::core::errors::ValidationError;
use crate::services::validation::validation::Validation;

/// 필수 필드가 존재하는지 검사하는 검증
///
/// 필드가 레코드에 없거나, JSON `null`이거나, 빈 문자열이면
/// [`ValidationError::MissingParam`]을 보고합니다. 그 외의 값은 타입과
/// 무관하게 존재하는 것으로 간주합니다.
pub struct RequiredFieldValidation {
    field_name: String,
}

impl RequiredFieldValidation {
    /// 검사할 필드 이름으로 검증을 생성합니다.
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
        }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &Map<String, Value>) -> Option<ValidationError> {
        match input.get(&self.field_name) {
            None | Some(Value::Null) => Some(ValidationError::missing(&self.field_name)),
            Some(Value::String(value)) if value.is_empty() => {
                Some(ValidationError::missing(&self.field_name))
            }
            Some(_) => None,
        }
    }
}
