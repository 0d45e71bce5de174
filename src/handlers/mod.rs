//! Request handlers: translate path/query/body input into query-layer calls
//! and wrap results in the endpoint's envelope.

pub mod api;
pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

use crate::error::ApiError;
use serde_json::Value;

/// Path ids arrive as raw strings so a non-numeric segment maps to our 400
/// body instead of the extractor's rejection.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i32, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::InvalidInput(format!("{} id must be an integer, got '{}'", what, raw)))
}

pub(crate) fn require_int_field(body: &Value, field: &str) -> Result<i32, ApiError> {
    body.get(field)
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ApiError::InvalidInput(format!("body must contain an integer '{}'", field)))
}

pub(crate) fn require_str_field<'a>(body: &'a Value, field: &str) -> Result<&'a str, ApiError> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::InvalidInput(format!("body must contain a string '{}'", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_id_rejects_non_numeric_segments() {
        assert_eq!(parse_id("42", "article").unwrap(), 42);
        assert!(matches!(
            parse_id("forty-two", "article"),
            Err(ApiError::InvalidInput(_))
        ));
        assert!(matches!(parse_id("", "comment"), Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn body_field_helpers_reject_wrong_types() {
        let body = json!({"inc_votes": 3, "username": "ada"});
        assert_eq!(require_int_field(&body, "inc_votes").unwrap(), 3);
        assert_eq!(require_str_field(&body, "username").unwrap(), "ada");

        assert!(require_int_field(&json!({"inc_votes": "3"}), "inc_votes").is_err());
        assert!(require_int_field(&json!({"inc_votes": 1.5}), "inc_votes").is_err());
        assert!(require_str_field(&json!({}), "username").is_err());
    }
}
