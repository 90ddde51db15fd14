use actix_web::{get, HttpResponse};

use crate::domain::dto::users::response::HealthResponse;

/// 응답에 표시되는 서비스 이름
pub const SERVICE_NAME: &str = "user-service";

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
///
/// Response:
/// ```json
/// { "status": "ok", "service": "user-service" }
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok(SERVICE_NAME))
}
