//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트와 JSON 본문 추출 설정을 하나의 `ServiceConfig`에 등록합니다.
//! 전역 애플리케이션 객체 없이, 각 워커가 이 함수로 자신의 `App`을 구성합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST /users` - 사용자 페이로드 검증 및 에코
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, 100 * 1024));
//! ```

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest};
use log::warn;

use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `json_limit` - JSON 요청 본문 최대 크기 (바이트)
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, json_limit: usize) {
    cfg.app_data(json_config(json_limit));

    // Health check endpoint
    cfg.service(handlers::health::health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:3000/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Dan","email":"dan@example.com"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").service(handlers::users::create_user));
}

/// JSON 추출기 설정을 생성합니다
///
/// 파싱 실패와 Content-Type 불일치는 `invalid json`(400),
/// 크기 초과는 `payload too large`(413)로 응답합니다.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let app_error = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            AppError::PayloadTooLarge
        }
        _ => AppError::InvalidJson(err.to_string()),
    };

    warn!(
        "{} {} 요청 본문 거부: {} ({})",
        req.method(),
        req.path(),
        app_error,
        app_error.detail().unwrap_or("-")
    );

    app_error.into()
}
