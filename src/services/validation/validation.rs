//! 검증 능력(capability) 인터페이스
//!
//! 입력 레코드를 검사하여 에러 또는 통과를 보고하는 단일 메서드 trait입니다.
//! Spring의 `Validator` 인터페이스와 동일한 역할을 수행합니다.

use serde_json::{Map, Value};

use crate::core::errors::ValidationError;

/// 상태 없는 검증 능력 인터페이스
///
/// 구현체는 입력 레코드를 순수 함수로 검사하고, 실패 시 해당 필드를
/// 설명하는 [`ValidationError`]를, 통과 시 `None`을 반환합니다.
///
/// 입력은 임의의 key-value 레코드(`serde_json::Map`)이며, 레코드의 형태에
/// 대한 제약은 각 구현체가 해석합니다. 구현체는 소유 데이터 없이 설정값만
/// 보관하며, 부수 효과가 없어야 합니다. 덕분에 하나의 인스턴스를 서버
/// 시작 시 생성해 모든 요청에서 재사용할 수 있습니다.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::services::validation::Validation;
///
/// struct NonEmptyBody;
///
/// impl Validation for NonEmptyBody {
///     fn validate(&self, input: &Map<String, Value>) -> Option<ValidationError> {
///         if input.is_empty() {
///             Some(ValidationError::missing("body"))
///         } else {
///             None
///         }
///     }
/// }
/// ```
pub trait Validation: Send + Sync {
    /// 입력 레코드를 검사합니다.
    ///
    /// # Returns
    ///
    /// * `None` - 검증 통과
    /// * `Some(ValidationError)` - 실패한 필드를 설명하는 에러
    fn validate(&self, input: &Map<String, Value>) -> Option<ValidationError>;
}
