//! # 문자열 유틸리티
//!
//! 신뢰할 수 없는 JSON 입력에서 텍스트 필드를 다루는 공통 함수들입니다.

use serde::Deserialize;
use serde_json::Value;

/// JSON 값이 문자열이면 그대로, 아니면 `None`을 반환합니다
///
/// 공백 제거(trim)는 하지 않습니다. 원본 길이가 검증 기준이기 때문입니다.
///
/// # 예제
/// ```rust,ignore
/// use serde_json::json;
/// use crate::utils::string_utils::text_or_none;
///
/// assert_eq!(text_or_none(&json!("Dan")), Some("Dan".to_string()));
/// assert_eq!(text_or_none(&json!(0)), None);
/// assert_eq!(text_or_none(&json!(null)), None);
/// ```
pub fn text_or_none(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// 텍스트 전용 선택 필드를 위한 serde deserializer
///
/// 필드 값의 타입과 무관하게 역직렬화에 실패하지 않습니다.
/// 문자열은 `Some`, 그 외 값(`null`, 숫자, 불리언, 배열, 객체)은 `None`이 됩니다.
/// 필드 자체가 없는 경우를 위해 `#[serde(default)]`와 함께 사용합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Record {
///     #[serde(default, deserialize_with = "deserialize_text_or_none")]
///     name: Option<String>,
/// }
///
/// // JSON: {"name": "  Dan "} → Some("  Dan ")
/// // JSON: {"name": 42}       → None
/// // JSON: {"name": null}     → None
/// // JSON: {}                 → None
/// ```
pub fn deserialize_text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_or_none(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_text_or_none")]
        field: Option<String>,
    }

    fn probe(body: Value) -> Option<String> {
        Probe::deserialize(&body).unwrap().field
    }

    #[test]
    fn test_text_or_none() {
        assert_eq!(text_or_none(&json!("Dan")), Some("Dan".to_string()));
        assert_eq!(text_or_none(&json!("")), Some(String::new()));
        assert_eq!(text_or_none(&json!(null)), None);
        assert_eq!(text_or_none(&json!(7)), None);
        assert_eq!(text_or_none(&json!(false)), None);
        assert_eq!(text_or_none(&json!(["Dan"])), None);
        assert_eq!(text_or_none(&json!({ "first": "Dan" })), None);
    }

    #[test]
    fn test_deserialize_keeps_whitespace() {
        assert_eq!(probe(json!({ "field": "  Dan  " })), Some("  Dan  ".to_string()));
    }

    #[test]
    fn test_deserialize_non_text_is_none() {
        assert_eq!(probe(json!({ "field": 0 })), None);
        assert_eq!(probe(json!({ "field": true })), None);
        assert_eq!(probe(json!({ "field": null })), None);
        assert_eq!(probe(json!({ "field": { "nested": "x" } })), None);
    }

    #[test]
    fn test_deserialize_missing_field_is_none() {
        assert_eq!(probe(json!({})), None);
        assert_eq!(probe(json!({ "other": "value" })), None);
    }
}
