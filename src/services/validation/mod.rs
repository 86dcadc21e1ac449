//! 요청 검증 서비스 모듈
//!
//! 입력 레코드에 대한 검증을 조합 가능한 능력 객체로 제공하는 모듈입니다.
//! 단일 메서드 trait([`Validation`])과 이를 순서대로 실행하는 컴포지트
//! ([`ValidationComposite`]), 그리고 구체 검증 구현들로 구성됩니다.
//!
//! # 설계
//!
//! - **능력 기반 다형성**: [`Validation`], [`EmailValidator`]는 trait으로
//!   추상화되어 테스트 더블이 동일 인터페이스를 구현합니다.
//! - **단락 평가**: 컴포지트는 첫 실패에서 중단하고 해당 에러를 그대로
//!   전파합니다. 여러 누락 필드를 집계하지 않습니다.
//! - **불변/재사용**: 모든 검증은 상태가 없으므로 서버 시작 시 조립된
//!   체인을 모든 요청에서 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::validation::{make_signup_validation, Validation, ValidatorEmailValidator};
//!
//! let chain = make_signup_validation(Arc::new(ValidatorEmailValidator));
//! let error = chain.validate(&request_body);
//! ```

pub mod compare_fields;
pub mod composite;
pub mod email;
pub mod factory;
pub mod required_field;
pub mod validation;

pub use compare_fields::CompareFieldsValidation;
pub use composite::ValidationComposite;
pub use email::{EmailFieldValidation, EmailValidator, ValidatorEmailValidator};
pub use factory::{SIGNUP_REQUIRED_FIELDS, make_signup_validation};
pub use required_field::RequiredFieldValidation;
pub use validation::Validation;
