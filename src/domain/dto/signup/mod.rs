//! 회원가입 기능의 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::SignUpRequest;
pub use response::SignUpResponse;
