//! HTTP 서버 구성 모듈
//!
//! [`ServerConfig`] 값을 받아 actix-web 서버를 생성합니다.
//! 라우트, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use log::info;

use crate::config::{CorsConfig, ServerConfig};
use crate::routes::configure_all_routes;

/// HTTP 서버를 구성하고 바인딩합니다
///
/// 반환된 [`Server`]를 `await`하면 종료될 때까지 요청을 처리합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패
///
/// # Examples
///
/// ```rust,ignore
/// let config = ServerConfig::from_env();
/// build_server(&config)?.await
/// ```
pub fn build_server(config: &ServerConfig) -> std::io::Result<Server> {
    let bind_address = config.bind_address();
    let json_limit = config.json_limit_bytes;
    let cors_config = config.cors.clone();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| configure_all_routes(cfg, json_limit))
    })
    .client_request_timeout(config.client_request_timeout)
    .keep_alive(config.keep_alive)
    .shutdown_timeout(config.shutdown_timeout.as_secs());

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    Ok(server.bind(bind_address)?.run())
}

/// CORS 설정을 구성합니다
///
/// 개발 환경에서는 모든 Origin을 허용하고,
/// 그 외 환경에서는 설정된 Origin만 허용합니다.
pub fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = if config.allow_any_origin {
        Cors::default().allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    fn cors_config(origins: &[&str], allow_any_origin: bool) -> CorsConfig {
        CorsConfig {
            allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
            allow_any_origin,
        }
    }

    #[actix_web::test]
    async fn test_cors_allows_configured_origin() {
        let config = cors_config(&["http://localhost:3000"], false);
        let app = test::init_service(
            App::new()
                .wrap(configure_cors(&config))
                .configure(|cfg| configure_all_routes(cfg, 1024)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
    }

    #[actix_web::test]
    async fn test_cors_allows_any_origin_in_development() {
        let config = cors_config(&[], true);
        let app = test::init_service(
            App::new()
                .wrap(configure_cors(&config))
                .configure(|cfg| configure_all_routes(cfg, 1024)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/health")
            .insert_header((header::ORIGIN, "http://dev.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_build_server_binds_ephemeral_port() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: Some(1),
            ..ServerConfig::default()
        };

        let server = build_server(&config).unwrap();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        handle.stop(false).await;
    }
}
