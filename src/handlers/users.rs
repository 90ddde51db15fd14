//! # User HTTP Handlers
//!
//! 사용자 페이로드를 검증하고 그대로 되돌려주는 엔드포인트입니다.
//! 저장은 하지 않습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 사용자 페이로드 검증 및 에코 | 201 Created / 400 Bad Request |

use actix_web::{post, web, HttpResponse};
use log::{info, warn};
use serde_json::Value;

use crate::domain::dto::users::response::CreateUserResponse;
use crate::errors::AppError;
use crate::services::users::validate_user;

/// 사용자 생성 핸들러
///
/// 요청 본문을 검증하고, 통과하면 본문을 그대로 응답에 담아 돌려줍니다.
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Dan",
///   "email": "dan@example.com"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "status": "created",
///   "user": { "name": "Dan", "email": "dan@example.com" }
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// { "error": "invalid user" }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:3000/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Dan","email":"dan@example.com"}'
/// ```
#[post("")]
pub async fn create_user(payload: web::Json<Value>) -> Result<HttpResponse, AppError> {
    let body = payload.into_inner();

    // 이메일은 로그에 남기지 않음
    validate_user(&body).inspect_err(|e| warn!("사용자 생성 거부: {}", e))?;
    info!("사용자 페이로드 승인");

    Ok(HttpResponse::Created().json(CreateUserResponse::created(body)))
}
