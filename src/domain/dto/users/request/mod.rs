//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 파싱 (actix-web `JsonConfig`, 실패 시 `invalid json`)
//! 2. **형식 검증**: 필드 존재 여부, 길이, `@` 포함 여부 (`validator` 크레이트)
//!
//! 검증 실패는 `AppError::InvalidUser`로 변환되어 HTTP 400 응답이 됩니다.

pub mod create_user;

pub use create_user::UserRecord;
