//! 사용자 페이로드 검증 서비스
//!
//! 사용자 페이로드(`name`, `email`)를 검증하고 그대로 되돌려주는
//! 상태 없는 HTTP 서비스입니다. 저장소, 인증, 세션은 없습니다.
//!
//! # Features
//!
//! - **`POST /users`**: 페이로드 검증 후 201(에코) 또는 400(`invalid user`)
//! - **`GET /health`**: 헬스체크
//! - **환경 변수 설정**: 포트, 워커, 타임아웃, 본문 크기 제한, CORS
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 라우트 + JSON 추출 설정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 사용자 페이로드 검증 (순수 함수)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_service::config::ServerConfig;
//! use user_service::server::build_server;
//!
//! let config = ServerConfig::from_env();
//! build_server(&config)?.await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod services;
pub mod utils;
