//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 하나의 [`ServerConfig`] 값으로 모아
//! 서버 시작 시 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 실행 환경, 서버 바인딩, 타임아웃, CORS 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use user_service::config::ServerConfig;
//!
//! let config = ServerConfig::from_env();
//! println!("Server will bind to {}", config.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export WORKERS="4"
//!
//! # 요청 처리
//! export JSON_LIMIT_BYTES="102400"
//! export CLIENT_REQUEST_TIMEOUT_SECS="5"
//! export KEEP_ALIVE_SECS="120"
//!
//! # 환경 및 CORS
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export CORS_ALLOWED_ORIGINS="https://app.example.com"
//! ```

pub mod server_config;

pub use server_config::*;
