//! # 사용자 페이로드 검증
//!
//! 서비스의 유일한 도메인 로직입니다. 상태가 없고 I/O도 없는 순수 함수이므로
//! 모든 워커에서 잠금 없이 동시에 호출할 수 있습니다.
//!
//! ## 판정 규칙
//!
//! 앞 규칙부터 검사하며 처음 실패한 규칙에서 거부합니다.
//!
//! 1. `name`이 없거나 비어 있거나 2자 미만이면 거부
//! 2. `email`이 없거나 비어 있거나 `@`를 포함하지 않으면 거부
//! 3. 그 외에는 승인

use log::debug;
use serde_json::Value;
use validator::Validate;

use crate::domain::dto::users::request::UserRecord;
use crate::errors::{AppError, AppResult};

/// 레코드가 유효한지 판정합니다.
///
/// 실패하지 않으며 같은 입력에 대해 항상 같은 결과를 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let record = UserRecord::new("Al", "a@b.com");
/// assert!(is_valid(&record));
/// ```
pub fn is_valid(record: &UserRecord) -> bool {
    record.validate().is_ok()
}

/// 파싱된 요청 본문을 검증하고 레코드를 반환합니다.
///
/// 거부 사유는 디버그 로그로만 남기고 호출자에게는
/// [`AppError::InvalidUser`]만 전달합니다.
///
/// # Errors
///
/// * `AppError::InvalidUser` - 본문이 검증 규칙을 만족하지 않는 경우
pub fn validate_user(body: &Value) -> AppResult<UserRecord> {
    let record = UserRecord::from_json(body);

    match record.validate() {
        Ok(()) => Ok(record),
        Err(errors) => {
            debug!("사용자 페이로드 거부: {}", errors);
            Err(AppError::InvalidUser)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(body: Value) -> bool {
        is_valid(&UserRecord::from_json(&body))
    }

    #[test]
    fn test_valid_user() {
        assert!(check(json!({ "name": "Dan", "email": "dan@example.com" })));
    }

    #[test]
    fn test_short_name_and_bad_email() {
        assert!(!check(json!({ "name": "d", "email": "bad" })));
    }

    #[test]
    fn test_valid_name_invalid_email() {
        assert!(!check(json!({ "name": "Dan", "email": "bad" })));
    }

    #[test]
    fn test_missing_name() {
        assert!(!check(json!({ "email": "dan@example.com" })));
    }

    #[test]
    fn test_name_length_boundary() {
        assert!(check(json!({ "name": "Al", "email": "a@b.com" })));
        assert!(!check(json!({ "name": "A", "email": "a@b.com" })));
    }

    #[test]
    fn test_empty_object() {
        assert!(!check(json!({})));
    }

    #[test]
    fn test_missing_email() {
        assert!(!check(json!({ "name": "Dan" })));
    }

    #[test]
    fn test_empty_strings_rejected() {
        assert!(!check(json!({ "name": "", "email": "dan@example.com" })));
        assert!(!check(json!({ "name": "Dan", "email": "" })));
    }

    #[test]
    fn test_null_fields_rejected() {
        assert!(!check(json!({ "name": null, "email": "dan@example.com" })));
        assert!(!check(json!({ "name": "Dan", "email": null })));
    }

    #[test]
    fn test_non_text_fields_rejected() {
        assert!(!check(json!({ "name": 0, "email": "dan@example.com" })));
        assert!(!check(json!({ "name": 12345, "email": "dan@example.com" })));
        assert!(!check(json!({ "name": true, "email": "dan@example.com" })));
        assert!(!check(json!({ "name": ["Dan"], "email": "dan@example.com" })));
        assert!(!check(json!({ "name": "Dan", "email": ["dan@example.com"] })));
        assert!(!check(json!({ "name": "Dan", "email": { "at": "@" } })));
    }

    #[test]
    fn test_no_trimming() {
        assert!(check(json!({ "name": "  ", "email": "@" })));
        assert!(!check(json!({ "name": " ", "email": "dan@example.com" })));
    }

    #[test]
    fn test_at_sign_anywhere() {
        assert!(check(json!({ "name": "Dan", "email": "@example.com" })));
        assert!(check(json!({ "name": "Dan", "email": "dan@" })));
        assert!(check(json!({ "name": "Dan", "email": "a@b@c" })));
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert!(check(json!({ "name": "김철", "email": "kim@example.com" })));
        assert!(!check(json!({ "name": "김", "email": "kim@example.com" })));
    }

    #[test]
    fn test_name_outside_bmp_counts_as_two() {
        assert!(check(json!({ "name": "😀", "email": "a@b" })));
        assert!(check(json!({ "name": "𝒜", "email": "a@b" })));
    }

    #[test]
    fn test_non_object_bodies_rejected() {
        assert!(!check(json!(null)));
        assert!(!check(json!(["Dan", "dan@example.com"])));
        assert!(!check(json!("Dan")));
    }

    #[test]
    fn test_idempotent() {
        let record = UserRecord::new("Dan", "dan@example.com");
        assert_eq!(is_valid(&record), is_valid(&record));

        let record = UserRecord::new("d", "bad");
        assert_eq!(is_valid(&record), is_valid(&record));
    }

    #[test]
    fn test_validate_user_returns_record() {
        let record = validate_user(&json!({ "name": "Dan", "email": "dan@example.com" })).unwrap();
        assert_eq!(record, UserRecord::new("Dan", "dan@example.com"));
    }

    #[test]
    fn test_validate_user_rejects_with_invalid_user() {
        let result = validate_user(&json!({ "name": "d", "email": "bad" }));
        assert!(matches!(result, Err(AppError::InvalidUser)));
    }
}
