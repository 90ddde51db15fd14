//! # Data Transfer Objects
//!
//! HTTP 계층과 검증 로직 사이에서 주고받는 데이터 구조입니다.
//! 모든 DTO는 요청 하나의 수명 동안만 존재하며 저장되지 않습니다.

pub mod users;

pub use users::*;
