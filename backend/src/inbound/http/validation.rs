//! Shared validation helpers for inbound HTTP adapters.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, ResponseError, web};
use serde_json::json;

use crate::domain::Error;

/// Largest JSON body accepted by the complaint endpoints.
pub const JSON_LIMIT_BYTES: usize = 64 * 1024;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::invalid_request(format!("missing required field: {}", field.as_str())).with_details(
        json!({
            "field": field.as_str(),
            "code": ErrorCode::MissingField.as_str(),
        }),
    )
}

/// Require an optional body field to be present.
pub(crate) fn require(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

fn malformed_body_error(err: &JsonPayloadError) -> Error {
    Error::invalid_request("request body must be a JSON object").with_details(json!({
        "code": ErrorCode::MalformedBody.as_str(),
        "reason": err.to_string(),
    }))
}

/// JSON extractor settings that turn body errors into structured 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(|err, _req: &HttpRequest| {
            let response = malformed_body_error(&err).error_response();
            InternalError::from_response(err, response).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_field_carries_field_and_code() {
        let err = missing_field_error(FieldName::new("email"));

        assert_eq!(err.message(), "missing required field: email");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "email", "code": "missing_field"}))
        );
    }

    #[rstest]
    #[case(Some("a@x.com".to_owned()), true)]
    #[case(None, false)]
    fn require_checks_presence(#[case] value: Option<String>, #[case] ok: bool) {
        assert_eq!(require(value, FieldName::new("email")).is_ok(), ok);
    }

    #[rstest]
    fn malformed_body_reports_reason() {
        let err = malformed_body_error(&JsonPayloadError::ContentType);
        let details = err.details().expect("details");
        assert_eq!(details["code"], "malformed_body");
    }
}
