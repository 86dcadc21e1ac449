//! 회원가입 요청 DTO
//!
//! 새로운 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 필드 존재 여부와 형식 검증은 `ValidationComposite`가 원본 JSON 레코드에
//! 대해 먼저 수행하므로, 이 DTO는 검증을 통과한 본문에서만 생성됩니다.

use serde::{Deserialize, Serialize};

/// 새로운 계정 생성을 위한 요청 DTO
///
/// 와이어 필드 이름은 camelCase를 사용합니다
/// (`name`, `email`, `password`, `passwordConfirmation`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// 사용자 이름
    pub name: String,

    /// 사용자 이메일 주소
    pub email: String,

    /// 계정 비밀번호
    pub password: String,

    /// 비밀번호 확인 (password와 일치해야 함)
    pub password_confirmation: String,
}
