//! # Domain Layer Module
//!
//! 사용자 페이로드와 응답 구조를 정의하는 도메인 계층입니다.
//! 상태나 영속성 없이 요청 단위로 생성되고 버려지는 값 타입만 포함합니다.

pub mod dto;

pub use dto::*;
