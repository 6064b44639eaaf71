//
//  gogs-client
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Response classification.
//!
//! The service answers in three shapes, and each endpoint uses exactly one:
//!
//! | Shape | Status | Classifier |
//! |-------|--------|------------|
//! | Bare resource | 200 / 201 | [`expect_statuses`] and friends |
//! | Search envelope `{ok, data}` | 200 | [`expect_ok`] |
//! | No body | 204 | [`expect_no_content`] |
//!
//! A response that does not match is returned whole inside
//! [`ApiError::Status`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::common::{ApiError, RawResponse};

/// Accepts the response if its status is in `allowed` and decodes the body.
///
/// # Errors
///
/// - [`ApiError::Status`] if the status is not accepted
/// - [`ApiError::Json`] if the body of an accepted response is not valid JSON for `T`
///
/// # Example
///
/// ```rust
/// use gogs_client::api::common::RawResponse;
/// use gogs_client::api::response::expect_statuses;
///
/// let ids: Vec<u32> = expect_statuses(&[200, 201], RawResponse::new(201, "[1, 2]")).unwrap();
/// assert_eq!(ids, vec![1, 2]);
///
/// let err = expect_statuses::<Vec<u32>>(&[200], RawResponse::new(500, "boom")).unwrap_err();
/// assert_eq!(err.status(), Some(500));
/// ```
pub fn expect_statuses<T: DeserializeOwned>(
    allowed: &[u16],
    response: RawResponse,
) -> Result<T, ApiError> {
    if !allowed.contains(&response.status) {
        return Err(ApiError::Status(response));
    }
    Ok(serde_json::from_str(&response.data)?)
}

/// Accepts a single status code.
pub fn expect_status<T: DeserializeOwned>(
    status: u16,
    response: RawResponse,
) -> Result<T, ApiError> {
    expect_statuses(&[status], response)
}

/// Accepts `200 OK`.
pub fn expect_standard<T: DeserializeOwned>(response: RawResponse) -> Result<T, ApiError> {
    expect_status(200, response)
}

/// Accepts `201 Created`.
pub fn expect_created<T: DeserializeOwned>(response: RawResponse) -> Result<T, ApiError> {
    expect_status(201, response)
}

/// Accepts only `204 No Content`, returning `true`.
///
/// The body is ignored.
pub fn expect_no_content(response: RawResponse) -> Result<bool, ApiError> {
    if response.status != 204 {
        return Err(ApiError::Status(response));
    }
    Ok(true)
}

/// Accepts a `200 OK` search envelope and returns its `data` field.
///
/// The body must carry a truthy `ok` field; otherwise the whole response is
/// returned as [`ApiError::Status`], exactly as for an unexpected status.
///
/// # Example
///
/// ```rust
/// use gogs_client::api::common::RawResponse;
/// use gogs_client::api::response::expect_ok;
///
/// let data: Vec<u8> = expect_ok(RawResponse::new(200, r#"{"ok":true,"data":[1,2]}"#)).unwrap();
/// assert_eq!(data, vec![1, 2]);
///
/// assert!(expect_ok::<Vec<u8>>(RawResponse::new(200, r#"{"ok":false,"data":[]}"#)).is_err());
/// ```
pub fn expect_ok<T: DeserializeOwned>(response: RawResponse) -> Result<T, ApiError> {
    let mut envelope: Value = expect_standard(response.clone())?;

    if !envelope.get("ok").is_some_and(is_truthy) {
        return Err(ApiError::Status(response));
    }

    let data = envelope
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null);

    Ok(serde_json::from_value(data)?)
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The classification a route applies to its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Bare JSON resource with one of the listed statuses.
    Status(&'static [u16]),

    /// `204 No Content`; decodes to `true`.
    NoContent,

    /// `200 OK` search envelope; decodes the `data` field.
    Envelope,
}

impl Expect {
    /// Applies this classification to a response.
    pub fn classify<T: DeserializeOwned>(&self, response: RawResponse) -> Result<T, ApiError> {
        match self {
            Self::Status(allowed) => expect_statuses(allowed, response),
            Self::Envelope => expect_ok(response),
            Self::NoContent => {
                let done = expect_no_content(response)?;
                Ok(serde_json::from_value(Value::Bool(done))?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expect_statuses_accepts_listed_status() {
        let value: Value = expect_statuses(&[200, 201], RawResponse::new(201, r#"{"id":1}"#)).unwrap();
        assert_eq!(value, json!({"id": 1}));
    }

    #[test]
    fn test_expect_statuses_rejects_with_full_response() {
        let err = expect_statuses::<Value>(&[201], RawResponse::new(422, "bad")).unwrap_err();
        match err {
            ApiError::Status(response) => {
                assert_eq!(response.status, 422);
                assert_eq!(response.data, "bad");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_expect_statuses_bad_json() {
        let err = expect_standard::<Value>(RawResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }

    #[test]
    fn test_expect_no_content() {
        assert!(expect_no_content(RawResponse::new(204, "")).unwrap());
        let err = expect_no_content(RawResponse::new(200, "{}")).unwrap_err();
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn test_expect_ok_resolves_data() {
        let data: Vec<u32> = expect_ok(RawResponse::new(200, r#"{"ok":true,"data":[1,2]}"#)).unwrap();
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_expect_ok_rejects_falsy_envelope() {
        let response = RawResponse::new(200, r#"{"ok":false,"data":[]}"#);
        let err = expect_ok::<Vec<u32>>(response.clone()).unwrap_err();
        assert_eq!(err.response(), Some(&response));

        let missing = RawResponse::new(200, r#"{"data":[1]}"#);
        assert!(matches!(
            expect_ok::<Vec<u32>>(missing),
            Err(ApiError::Status(_))
        ));
    }

    #[test]
    fn test_expect_ok_rejects_non_200() {
        let err = expect_ok::<Vec<u32>>(RawResponse::new(500, r#"{"ok":true,"data":[]}"#)).unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }

    #[test]
    fn test_expect_classify_dispatch() {
        let deleted: bool = Expect::NoContent.classify(RawResponse::new(204, "")).unwrap();
        assert!(deleted);

        let created: Value = Expect::Status(&[201])
            .classify(RawResponse::new(201, r#"{"name":"t1"}"#))
            .unwrap();
        assert_eq!(created["name"], "t1");

        let found: Vec<String> = Expect::Envelope
            .classify(RawResponse::new(200, r#"{"ok":true,"data":["a"]}"#))
            .unwrap();
        assert_eq!(found, vec!["a".to_string()]);
    }
}
