//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! `{"error": "<message>"}` 형태의 JSON 응답으로 변환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn create_user(body: web::Json<Value>) -> Result<HttpResponse, AppError> {
//!     if !is_valid(&UserRecord::from_json(&body)) {
//!         return Err(AppError::InvalidUser);
//!     }
//!     Ok(HttpResponse::Created().finish())
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 상세 정보(`InvalidJson`의 내용)는 로그에만 남기고
/// 클라이언트에게는 고정된 메시지만 전달합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 사용자 페이로드 검증 실패 (400 Bad Request)
    #[error("invalid user")]
    InvalidUser,

    /// 요청 본문이 JSON으로 파싱되지 않음 (400 Bad Request)
    #[error("invalid json")]
    InvalidJson(String),

    /// 요청 본문이 허용 크기를 초과함 (413 Payload Too Large)
    #[error("payload too large")]
    PayloadTooLarge,
}

impl AppError {
    /// 로그용 상세 메시지를 반환합니다.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::InvalidJson(detail) => Some(detail.as_str()),
            _ => None,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUser | AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
