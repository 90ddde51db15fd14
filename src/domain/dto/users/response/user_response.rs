use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 사용자 생성 응답 DTO
///
/// `user`에는 요청 본문이 가공 없이 그대로 담깁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub status: String,
    pub user: Value,
}

impl CreateUserResponse {
    pub fn created(user: Value) -> Self {
        Self {
            status: "created".to_string(),
            user,
        }
    }
}

/// 헬스체크 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.into(),
        }
    }
}
