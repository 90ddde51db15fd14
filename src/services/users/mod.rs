//! 사용자 관련 서비스 모듈
//!
//! 사용자 페이로드 검증 로직을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{is_valid, validate_user};
//!
//! let record = validate_user(&body)?;
//! ```

pub mod user_validator;

pub use user_validator::{is_valid, validate_user};
