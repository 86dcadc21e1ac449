//! # Data Transfer Objects
//!
//! API 계층과 서비스 계층 사이에서 오가는 데이터 구조를 정의합니다.
//! 기능별로 하위 모듈을 나누며, 각 기능은 request/response DTO를 가집니다.

pub mod signup;
