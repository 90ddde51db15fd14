//! # 사용자 생성 요청 DTO
//!
//! `POST /users` 요청 본문을 검증 가능한 타입으로 표현합니다.
//! 본문은 신뢰할 수 없는 입력이므로 두 필드 모두 누락, `null`,
//! 문자열이 아닌 값일 수 있으며, 이러한 경우는 모두 `None`으로 정규화되어
//! 검증 단계에서 거부됩니다.
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 필수
//! - 길이: 최소 2 (공백 제거 없이 원본 기준, UTF-16 코드 유닛 단위)
//!   - `"😀"`처럼 BMP 밖의 문자 하나는 길이 2로 계산됨
//!
//! ### 이메일 (`email`)
//! - 필수
//! - `@` 문자를 포함해야 함 (그 외 형식 검증 없음)
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use serde_json::json;
//! use validator::Validate;
//! use crate::domain::dto::users::request::UserRecord;
//!
//! let record = UserRecord::from_json(&json!({ "name": "Dan", "email": "dan@example.com" }));
//! assert!(record.validate().is_ok());
//! ```

use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::deserialize_text_or_none;

/// 검증 대상 사용자 레코드
///
/// 요청 하나의 수명 동안만 존재하며 저장되지 않습니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Dan",
///   "email": "dan@example.com"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UserRecord {
    /// 사용자 이름
    #[serde(default, deserialize_with = "deserialize_text_or_none")]
    #[validate(
        required(message = "name is required"),
        custom(function = "validate_name_length")
    )]
    pub name: Option<String>,

    /// 사용자 이메일 주소
    #[serde(default, deserialize_with = "deserialize_text_or_none")]
    #[validate(
        required(message = "email is required"),
        contains(pattern = "@", message = "email must contain '@'")
    )]
    pub email: Option<String>,
}

/// 이름 최소 길이 (UTF-16 코드 유닛)
const NAME_MIN_LENGTH: usize = 2;

/// 이름 길이 검증
///
/// 길이는 UTF-16 코드 유닛 수로 셉니다.
///
/// # 에러 코드
///
/// - `length`: 길이가 2 미만인 경우
fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    if name.encode_utf16().count() < NAME_MIN_LENGTH {
        return Err(ValidationError::new("length")
            .with_message("name must be at least 2 characters".into()));
    }
    Ok(())
}

impl UserRecord {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// 파싱된 JSON 본문으로부터 레코드를 구성합니다.
    ///
    /// 객체가 아닌 본문(배열, 문자열, 숫자, `null` 등)은 두 필드가 모두
    /// 비어 있는 레코드가 됩니다. 실패하지 않습니다.
    pub fn from_json(body: &Value) -> Self {
        match body {
            // 필드 역직렬화기가 모든 JSON 값을 받아들이므로 객체 입력은 실패하지 않음
            Value::Object(_) => Self::deserialize(body).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}
