//! 회원가입 서비스 모듈
//!
//! 회원가입 요청의 검증과 계정 생성 응답을 담당하는 서비스를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::signup::SignUpService;
//!
//! let service = SignUpService::default();
//! let response = service.sign_up(body).await?;
//! ```

pub mod signup_service;

pub use signup_service::SignUpService;
