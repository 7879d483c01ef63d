//! Error types for the USA Gymnastics client.
//!
//! # Design
//! Two layers. `ParseError` covers failures while turning one JSON item into
//! a record or an enum value. `ApiError` is what every public operation
//! returns: one variant per status class the API distinguishes, plus the
//! parse, decoding, transport and configuration failures around them.
//!
//! Status variants keep the status code, the message and the decoded body so
//! callers can branch on the kind without matching strings. Nothing here is
//! retried; whether a `RateLimited` error is worth waiting out is the
//! caller's decision.

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::http::HttpResponse;

/// Failure while building a record or enum value from API data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required key is absent or null.
    #[error("{record}: missing required field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// A code matched neither a canonical value nor a known synonym.
    #[error("unrecognized {family} value `{value}`")]
    UnrecognizedEnumValue { family: &'static str, value: String },

    /// A key is present but holds a value of the wrong shape.
    #[error("{record}: field `{field}` is invalid: {reason}")]
    InvalidField {
        record: &'static str,
        field: &'static str,
        reason: String,
    },

    /// The item handed to a record constructor is not a JSON object.
    #[error("{record}: expected a JSON object")]
    NotAnObject { record: &'static str },

    /// Parallel arrays describing the same rows disagree on length.
    #[error("{record}: `{field}` has {found} entries but `{reference}` has {expected}")]
    MisalignedColumns {
        record: &'static str,
        field: &'static str,
        reference: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 or 403: the credentials were rejected.
    #[error("authentication failed (HTTP {status}): {message}")]
    Authentication {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// 404: the sanction, person or route does not exist.
    #[error("not found (HTTP {status}): {message}")]
    NotFound {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// 422: the API rejected one or more inputs.
    #[error("validation failed (HTTP {status}): {message}")]
    Validation {
        status: u16,
        message: String,
        body: Option<Value>,
        errors: BTreeMap<String, Vec<String>>,
    },

    /// 429: too many requests.
    #[error("rate limited (HTTP {status}): {message}")]
    RateLimited {
        status: u16,
        message: String,
        body: Option<Value>,
        retry_after: Option<Duration>,
    },

    /// Any other non-2xx status.
    #[error("HTTP {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// A response item could not be turned into a record.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A success response was not JSON or lacked the expected envelope.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Map a non-2xx response to its error kind.
    pub fn from_response(response: &HttpResponse) -> Self {
        let status = response.status;
        let body: Option<Value> = serde_json::from_str(&response.body).ok();
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);

        match status {
            401 | 403 => ApiError::Authentication {
                status,
                message: message.unwrap_or_else(|| "Authentication failed.".to_string()),
                body,
            },
            404 => ApiError::NotFound {
                status,
                message: message
                    .unwrap_or_else(|| "The requested resource was not found.".to_string()),
                body,
            },
            422 => {
                let errors = body.as_ref().map(validation_errors).unwrap_or_default();
                ApiError::Validation {
                    status,
                    message: message.unwrap_or_else(|| "The given data was invalid.".to_string()),
                    body,
                    errors,
                }
            }
            429 => ApiError::RateLimited {
                status,
                message: message.unwrap_or_else(|| "Too many requests.".to_string()),
                retry_after: retry_after(response),
                body,
            },
            _ => {
                let message = message.unwrap_or_else(|| {
                    let raw = response.body.trim();
                    if body.is_none() && !raw.is_empty() {
                        raw.to_string()
                    } else {
                        format!("Request failed with status {status}")
                    }
                });
                ApiError::Api {
                    status,
                    message,
                    body,
                }
            }
        }
    }

    /// HTTP status for errors that came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authentication { status, .. }
            | ApiError::NotFound { status, .. }
            | ApiError::Validation { status, .. }
            | ApiError::RateLimited { status, .. }
            | ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message reported by the API, or the default for the error kind.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Authentication { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::RateLimited { message, .. }
            | ApiError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Decoded response body, when the response carried JSON.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Authentication { body, .. }
            | ApiError::NotFound { body, .. }
            | ApiError::Validation { body, .. }
            | ApiError::RateLimited { body, .. }
            | ApiError::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Messages the API attached to `field`; empty for other fields and
    /// for every non-validation error.
    pub fn field_errors(&self, field: &str) -> &[String] {
        match self {
            ApiError::Validation { errors, .. } => {
                errors.get(field).map(Vec::as_slice).unwrap_or(&[])
            }
            _ => &[],
        }
    }

    /// How long the API asked the caller to wait before the next request.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ApiError::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// Field messages live under `errors` or, on some routes, `data.errors`.
fn validation_errors(body: &Value) -> BTreeMap<String, Vec<String>> {
    let source = body
        .get("errors")
        .filter(|e| e.is_object())
        .or_else(|| body.pointer("/data/errors").filter(|e| e.is_object()));

    let Some(Value::Object(map)) = source else {
        return BTreeMap::new();
    };

    map.iter()
        .map(|(field, messages)| {
            let messages = match messages {
                Value::Array(items) => items
                    .iter()
                    .map(|m| match m {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
                Value::String(s) => vec![s.clone()],
                Value::Null => Vec::new(),
                other => vec![other.to_string()],
            };
            (field.clone(), messages)
        })
        .collect()
}

/// Only the delta-seconds form of `Retry-After` is honoured.
fn retry_after(response: &HttpResponse) -> Option<Duration> {
    response
        .header("retry-after")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, headers: &[(&str, &str)], body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.to_string(),
        }
    }

    #[test]
    fn unauthorized_and_forbidden_are_authentication_errors() {
        for status in [401, 403] {
            let err = ApiError::from_response(&response(status, &[], r#"{"message":"Bad creds"}"#));
            assert!(matches!(err, ApiError::Authentication { .. }), "{status}");
            assert_eq!(err.status(), Some(status));
            assert_eq!(err.message(), Some("Bad creds"));
        }
    }

    #[test]
    fn not_found_carries_default_message() {
        let err = ApiError::from_response(&response(404, &[], ""));
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert_eq!(err.message(), Some("The requested resource was not found."));
        assert!(err.body().is_none());
    }

    #[test]
    fn validation_errors_from_top_level_errors() {
        let err = ApiError::from_response(&response(
            422,
            &[],
            r#"{"message":"Invalid","errors":{"email":["invalid"]}}"#,
        ));
        assert_eq!(err.field_errors("email"), ["invalid".to_string()]);
        assert!(err.field_errors("memberId").is_empty());
    }

    #[test]
    fn validation_errors_from_data_envelope() {
        let err = ApiError::from_response(&response(
            422,
            &[],
            r#"{"data":{"errors":{"dob":"must be a date","people":["required","numeric"]}}}"#,
        ));
        assert_eq!(err.field_errors("dob"), ["must be a date".to_string()]);
        assert_eq!(err.field_errors("people").len(), 2);
        assert_eq!(err.message(), Some("The given data was invalid."));
    }

    #[test]
    fn rate_limit_reads_retry_after_header() {
        let err = ApiError::from_response(&response(429, &[("Retry-After", "120")], "{}"));
        assert_eq!(err.retry_after(), Some(Duration::from_secs(120)));
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn rate_limit_without_header_has_no_hint() {
        let err = ApiError::from_response(&response(429, &[], ""));
        assert!(matches!(err, ApiError::RateLimited { .. }));
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn rate_limit_ignores_http_date_form() {
        let err = ApiError::from_response(&response(
            429,
            &[("retry-after", "Wed, 21 Oct 2026 07:28:00 GMT")],
            "",
        ));
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn other_statuses_are_generic_and_keep_body() {
        let err = ApiError::from_response(&response(500, &[], r#"{"message":"boom","code":7}"#));
        assert!(matches!(err, ApiError::Api { status: 500, .. }));
        assert_eq!(err.message(), Some("boom"));
        assert_eq!(err.body().unwrap()["code"], 7);
    }

    #[test]
    fn non_json_error_body_becomes_message() {
        let err = ApiError::from_response(&response(502, &[], "Bad Gateway"));
        assert_eq!(err.message(), Some("Bad Gateway"));
        assert!(err.body().is_none());
    }

    #[test]
    fn field_errors_empty_for_non_validation() {
        let err = ApiError::from_response(&response(404, &[], ""));
        assert!(err.field_errors("email").is_empty());
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn parse_error_converts_and_has_no_status() {
        let err: ApiError = ParseError::MissingField {
            record: "AthleteReservation",
            field: "MemberID",
        }
        .into();
        assert!(err.status().is_none());
        assert_eq!(
            err.to_string(),
            "AthleteReservation: missing required field `MemberID`"
        );
    }
}
