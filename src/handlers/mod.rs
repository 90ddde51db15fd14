//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 본문 파싱을 actix-web에 맡기고, 검증은 서비스 계층에 위임한 뒤
//! 결과를 HTTP 응답으로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 사용자 페이로드 검증                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   DTO - UserRecord, 응답 구조                    ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: `POST /users`
//! - **`health`**: `GET /health`
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`는 `ResponseError` 구현을 통해 JSON 에러 응답으로 변환됩니다.

pub mod health;
pub mod users;
