//! # 사용자 관련 응답 DTO 모듈
//!
//! 서비스가 반환하는 JSON 응답 구조를 정의합니다.
//!
//! ## 응답 형식
//!
//! ### 사용자 생성 성공 (201 Created)
//! ```json
//! {
//!   "status": "created",
//!   "user": { "name": "Dan", "email": "dan@example.com" }
//! }
//! ```
//!
//! ### 헬스체크 (200 OK)
//! ```json
//! { "status": "ok", "service": "user-service" }
//! ```
//!
//! 에러 응답(`{"error": "..."}`)은 [`crate::errors::AppError`]가 생성합니다.

pub mod user_response;

pub use user_response::{CreateUserResponse, HealthResponse};
