//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 서버 바인딩, 워커, 타임아웃, 요청 본문 제한, CORS 관련 설정을 관리합니다.
//! 모든 값은 환경 변수 조회 함수를 통해 읽으므로 테스트에서 프로세스
//! 환경을 건드리지 않고도 검증할 수 있습니다.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use log::{error, info};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
/// `express.json()` 기본값과 같은 100 KiB
const DEFAULT_JSON_LIMIT_BYTES: usize = 100 * 1024;
const DEFAULT_CLIENT_REQUEST_TIMEOUT_SECS: u64 = 5;
const DEFAULT_KEEP_ALIVE_SECS: u64 = 120;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 모든 Origin 허용
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `RUST_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 조회 함수로부터 실행 환경을 결정합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = lookup("ENVIRONMENT")
            .or_else(|| lookup("RUST_ENV"))
            .unwrap_or_else(|| "production".to_string());

        Self::from_name(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// CORS 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// 허용할 Origin 목록
    pub allowed_origins: Vec<String>,
    /// true이면 Origin 검사를 하지 않음 (개발 환경)
    pub allow_any_origin: bool,
}

impl CorsConfig {
    /// 조회 함수와 실행 환경으로부터 CORS 설정을 구성합니다.
    ///
    /// # Environment Variables
    ///
    /// * `CORS_ALLOWED_ORIGINS` - 쉼표로 구분된 Origin 목록
    ///   (기본값: `http://localhost:3000,http://127.0.0.1:3000`)
    pub fn from_lookup<F>(lookup: &F, environment: Environment) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins: Vec<String> = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            allowed_origins,
            allow_any_origin: environment.is_development(),
        }
    }
}

/// 서버 바인딩 및 런타임 설정
///
/// 시작 시 한 번 구성되어 서버 생성 함수에 값으로 전달됩니다.
///
/// # Environment Variables
///
/// | 변수 | 기본값 |
/// |------|--------|
/// | `HOST` | `0.0.0.0` |
/// | `PORT` | `3000` |
/// | `WORKERS` | actix 기본값 |
/// | `JSON_LIMIT_BYTES` | `102400` |
/// | `CLIENT_REQUEST_TIMEOUT_SECS` | `5` |
/// | `KEEP_ALIVE_SECS` | `120` |
/// | `SHUTDOWN_TIMEOUT_SECS` | `10` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub json_limit_bytes: usize,
    pub client_request_timeout: Duration,
    pub keep_alive: Duration,
    pub shutdown_timeout: Duration,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
            json_limit_bytes: DEFAULT_JSON_LIMIT_BYTES,
            client_request_timeout: Duration::from_secs(DEFAULT_CLIENT_REQUEST_TIMEOUT_SECS),
            keep_alive: Duration::from_secs(DEFAULT_KEEP_ALIVE_SECS),
            shutdown_timeout: Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            cors: CorsConfig::from_lookup(
                &|_: &str| -> Option<String> { None },
                Environment::Production,
            ),
        }
    }
}

impl ServerConfig {
    /// 프로세스 환경 변수에서 설정을 로드합니다.
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());
        info!("서버 설정 로드됨: {:?}", config);
        config
    }

    /// 조회 함수로부터 설정을 구성합니다.
    ///
    /// 파싱에 실패한 값은 에러 로그를 남기고 기본값으로 대체합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);

        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let workers = parse_var::<usize, _>(&lookup, "WORKERS").filter(|&n| {
            if n == 0 {
                error!("WORKERS는 1 이상이어야 합니다. actix 기본값 사용");
            }
            n > 0
        });

        Self {
            environment,
            host,
            port: parse_var(&lookup, "PORT").unwrap_or(DEFAULT_PORT),
            workers,
            json_limit_bytes: parse_var(&lookup, "JSON_LIMIT_BYTES")
                .unwrap_or(DEFAULT_JSON_LIMIT_BYTES),
            client_request_timeout: Duration::from_secs(
                parse_var(&lookup, "CLIENT_REQUEST_TIMEOUT_SECS")
                    .unwrap_or(DEFAULT_CLIENT_REQUEST_TIMEOUT_SECS),
            ),
            keep_alive: Duration::from_secs(
                parse_var(&lookup, "KEEP_ALIVE_SECS").unwrap_or(DEFAULT_KEEP_ALIVE_SECS),
            ),
            shutdown_timeout: Duration::from_secs(
                parse_var(&lookup, "SHUTDOWN_TIMEOUT_SECS")
                    .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            ),
            cors: CorsConfig::from_lookup(&lookup, environment),
        }
    }

    /// `host:port` 형태의 바인딩 주소를 반환합니다.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 환경 변수를 파싱합니다. 값이 없으면 `None`, 파싱 실패 시 에러 로그 후 `None`.
fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            error!("{} 파싱 실패 ({:?}): {}. 기본값 사용", key, raw, e);
            None
        }
    }
}
