//! 회원가입 서비스 백엔드
//!
//! Rust 기반의 회원가입 API 서비스입니다.
//! 조합 가능한 검증 체인(Composite Validation)으로 요청 필드를 검사하고,
//! 싱글톤 ServiceLocator를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **회원가입**: 필수 필드/이메일 형식 검증 후 계정 생성 응답
//! - **컴포지트 검증**: 순서 고정, 첫 실패 단락 평가 검증 체인
//! - **능력 기반 다형성**: Validation / EmailValidator trait 추상화
//! - **싱글톤 DI**: ServiceLocator 기반 컴포넌트 관리
//! - **구조화된 에러**: `{name, message}` 형식의 400/500 JSON 응답
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 체인 + 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Domain DTOs    │ ← 요청/응답 계약
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use signup_service_backend::core::registry::ServiceLocator;
//! use signup_service_backend::services::signup::SignUpService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let signup_service = ServiceLocator::get::<SignUpService>();
//!
//! // 회원가입 요청 처리
//! let response = signup_service.sign_up(body).await?;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod services;
