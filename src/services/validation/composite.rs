//! 컴포지트 검증기
//!
//! 여러 검증을 순서대로 실행하고 첫 실패에서 중단하는 컴포지트 패턴
//! 구현입니다. 자기 자신도 [`Validation`]이므로 컴포지트를 중첩할 수 있습니다.

use serde_json::{Map, Value};

use crate::core::errors::ValidationError;
use crate::services::validation::validation::Validation;

/// 순서가 고정된 검증 시퀀스
///
/// 생성 시점에 전달된 순서 그대로 검증을 실행합니다. 생성 이후에는
/// 변경할 수 없으며, 보유한 검증들이 상태가 없으므로 서버 시작 시 한 번
/// 만들어 모든 요청에서 재사용합니다.
///
/// # 보장 사항
///
/// - **결정성**: 동일한 시퀀스와 입력에 대해 항상 동일한 결과를 반환합니다.
/// - **단락 평가**: 첫 번째 실패 이후의 검증은 호출되지 않습니다.
/// - **투명성**: 자식의 에러 값을 가공 없이 그대로 전파합니다.
pub struct ValidationComposite {
    validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
    /// 주어진 검증 시퀀스로 컴포지트를 생성합니다.
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }
}

impl Validation for ValidationComposite {
    /// 보유한 검증들을 생성 순서대로 실행합니다.
    ///
    /// 첫 번째로 에러를 반환한 검증의 에러를 즉시 반환하고, 모든 검증이
    /// 통과하면 `None`을 반환합니다.
    fn validate(&self, input: &Map<String, Value>) -> Option<ValidationError> {
        self.validations
            .iter()
            .find_map(|validation| validation.validate(input))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// 고정된 결과를 반환하면서 호출 횟수를 기록하는 스텁 검증
    struct ValidationStub {
        error: Option<ValidationError>,
        calls: Arc<AtomicUsize>,
    }

    impl ValidationStub {
        fn new(error: Option<ValidationError>) -> (Box<dyn Validation>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let stub = Box::new(ValidationStub {
                error,
                calls: calls.clone(),
            });
            (stub, calls)
        }
    }

    impl Validation for ValidationStub {
        fn validate(&self, _input: &Map<String, Value>) -> Option<ValidationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.error.clone()
        }
    }

    fn input_with_field() -> Map<String, Value> {
        let mut input = Map::new();
        input.insert("field".to_string(), Value::String("any_value".to_string()));
        input
    }

    #[test]
    fn test_returns_error_if_any_validation_fails() {
        let (stub, _) = ValidationStub::new(Some(ValidationError::missing("field")));
        let sut = ValidationComposite::new(vec![stub]);

        let error = sut.validate(&input_with_field());

        assert_eq!(error, Some(ValidationError::missing("field")));
    }

    #[test]
    fn test_returns_first_error_and_skips_later_validations() {
        let (failing, failing_calls) = ValidationStub::new(Some(ValidationError::invalid("email")));
        let (never_reached, never_reached_calls) = ValidationStub::new(None);
        let sut = ValidationComposite::new(vec![failing, never_reached]);

        let error = sut.validate(&input_with_field());

        assert_eq!(error, Some(ValidationError::invalid("email")));
        assert_eq!(failing_calls.load(Ordering::SeqCst), 1);
        assert_eq!(never_reached_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_returns_none_when_every_validation_passes() {
        let (first, first_calls) = ValidationStub::new(None);
        let (second, second_calls) = ValidationStub::new(None);
        let sut = ValidationComposite::new(vec![first, second]);

        let error = sut.validate(&input_with_field());

        assert_eq!(error, None);
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_composite_passes() {
        let sut = ValidationComposite::new(Vec::new());

        assert_eq!(sut.validate(&input_with_field()), None);
    }

    #[test]
    fn test_composite_is_deterministic() {
        let (stub, _) = ValidationStub::new(Some(ValidationError::missing("field")));
        let sut = ValidationComposite::new(vec![stub]);
        let input = input_with_field();

        assert_eq!(sut.validate(&input), sut.validate(&input));
    }
}
