//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 상태가 없는 순수 함수로 제공되며,
//! HTTP 핸들러가 직접 호출합니다.

pub mod users;
