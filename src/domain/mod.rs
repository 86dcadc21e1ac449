//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, API 계약(Contract)을 담당합니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행합니다.
//!
//! ## 모듈 구성
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! HTTP 요청/응답의 데이터 구조를 정의합니다.
//! Spring의 `@RequestBody` / `@ResponseBody` 객체와 동일한 역할입니다.
//!
//! 이 서비스는 영속 계층이 없으므로 별도의 엔티티 모듈은 두지 않습니다.
//! 회원가입 요청은 검증 통과 후 DTO로 역직렬화되어 응답 DTO로 변환됩니다.

pub mod dto;
