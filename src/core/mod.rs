//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! Spring Framework의 핵심 컨테이너 기능을 Rust 생태계에 맞게 구현하여,
//! 타입 안전성과 성능을 모두 만족하는 기반 계층을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext 역할
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//! - **Service trait**: 이름/초기화 훅을 갖는 서비스 공통 인터페이스
//!
//! ### [`errors`] - 통합 에러 처리
//! - **ValidationError**: 필드 검증 실패의 태그드 에러 타입
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **자동 변환**: thiserror 기반 에러 체인 관리
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `ApplicationContext` | `ServiceLocator` |
//! | `registerSingleton()` | `ServiceLocator::set()` |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//! | Bean 생명주기 | Singleton + Lazy 초기화 |

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
