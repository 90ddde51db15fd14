//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 신뢰할 수 없는 JSON 텍스트 필드 처리

pub mod string_utils;
