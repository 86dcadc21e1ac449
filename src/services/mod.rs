//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `ServiceLocator`를 통해 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 요청 검증과 회원가입 기능을 담당합니다.
//!
//! # Features
//!
//! - 조합 가능한 요청 검증 (Validation / ValidationComposite)
//! - 이메일 형식 검사 능력 (EmailValidator)
//! - 회원가입 요청 처리 및 계정 생성 응답
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//! use crate::services::signup::SignUpService;
//!
//! let signup_service = ServiceLocator::get::<SignUpService>();
//! ```

pub mod signup;
pub mod validation;
