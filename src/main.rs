//! 사용자 서비스 메인 애플리케이션
//!
//! 설정을 로드하고 Actix-web 기반의 HTTP 서버를 구동합니다.

use std::path::PathBuf;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service::config::ServerConfig;
use user_service::server::build_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let profile = std::env::var("PROFILE").unwrap_or_default();
    let env_file = load_env_file(&profile);

    init_logging();

    info!("Current profile: {:?}", profile);
    match env_file {
        Ok(path) => info!("{} 파일 로드 됨", path.display()),
        Err(e) if env_file_name(&profile).is_some() => error!("환경 파일 로드 실패: {}", e),
        Err(_) => info!("환경 파일 없음, 프로세스 환경 변수만 사용"),
    }

    info!("🚀 user-service 시작중...");

    let config = ServerConfig::from_env();
    info!("실행 환경: {:?}", config.environment);

    build_server(&config)?.await
}

/// 프로필에 해당하는 환경 파일 이름
///
/// * `dev` - .env.dev
/// * `prod` - .env.prod
/// * 기타 또는 미설정 - `None` (기본 .env 탐색)
fn env_file_name(profile: &str) -> Option<&'static str> {
    match profile {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// 로깅 초기화 전에 호출되므로 결과를 반환만 하고 기록은 호출자가 합니다.
fn load_env_file(profile: &str) -> Result<PathBuf, dotenv::Error> {
    match env_file_name(profile) {
        Some(file_name) => dotenv::from_filename(file_name),
        None => dotenv(),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=user_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
