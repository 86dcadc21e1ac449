//! 회원가입 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::signup::request::SignUpRequest;

/// 생성된 계정 정보 응답 DTO
///
/// 비밀번호는 어떤 형태로도 응답에 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    /// 생성된 계정의 고유 ID (UUID v4)
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<SignUpRequest> for SignUpResponse {
    fn from(request: SignUpRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            created_at: Utc::now(),
        }
    }
}
