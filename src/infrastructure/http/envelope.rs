// SPDX-License-Identifier: MPL-2.0
//! Response decoding.
//!
//! Success is any 2xx whose body is a JSON object, optionally carrying a
//! `message` and the payload under a known key. Failure is any other status;
//! its body may carry a `message` too. Everything else (non-JSON body,
//! missing payload) is normalized to a [`FetchError`] of kind `Decode`.

use crate::application::port::FetchError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Key of the optional human-readable message.
const MESSAGE_KEY: &str = "message";

/// Keys a server may use to state favorite membership explicitly.
const FAVORITE_KEYS: [&str; 3] = ["isFavorited", "favorited", "isFavorite"];

/// Decoded body of a successful response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    body: Map<String, Value>,
}

/// Decodes a raw response into an [`Envelope`] or a [`FetchError`].
///
/// # Errors
///
/// Returns a `Status` error for non-2xx statuses and a `Decode` error for
/// bodies that are not a JSON object.
pub fn decode(status: StatusCode, body: &[u8]) -> Result<Envelope, FetchError> {
    let parsed = serde_json::from_slice::<Value>(body);

    if !status.is_success() {
        let message = parsed.ok().and_then(|value| message_of(&value));
        return Err(FetchError::status(status.as_u16(), message));
    }

    if status == StatusCode::NO_CONTENT || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Envelope::default());
    }

    match parsed {
        Ok(Value::Object(body)) => Ok(Envelope { body }),
        Ok(other) => Err(FetchError::decode(format!(
            "expected a JSON object, got {}",
            kind_of(&other)
        ))),
        Err(err) => Err(FetchError::decode(format!("response is not JSON: {err}"))),
    }
}

impl Envelope {
    /// Returns the server message, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.body
            .get(MESSAGE_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    /// Removes and decodes the payload under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `Decode` error if the key is missing, null, or does not
    /// match `T`.
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, FetchError> {
        self.take_optional(key)?
            .ok_or_else(|| FetchError::decode(format!("response has no `{key}` field")))
    }

    /// Removes and decodes the payload under `key`, if present and not null.
    ///
    /// # Errors
    ///
    /// Returns a `Decode` error if the value does not match `T`.
    pub fn take_optional<T: DeserializeOwned>(
        &mut self,
        key: &str,
    ) -> Result<Option<T>, FetchError> {
        match self.body.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|err| FetchError::decode(format!("field `{key}`: {err}"))),
        }
    }

    /// Returns the favorite membership stated by the server, looking at the
    /// top level first and then inside the payload under `payload_key`.
    #[must_use]
    pub fn favorite_flag(&self, payload_key: &str) -> Option<bool> {
        let nested = self.body.get(payload_key).and_then(Value::as_object);
        std::iter::once(&self.body)
            .chain(nested)
            .find_map(|object| FAVORITE_KEYS.iter().find_map(|k| object.get(*k)?.as_bool()))
    }
}

fn message_of(value: &Value) -> Option<String> {
    value
        .get(MESSAGE_KEY)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FetchErrorKind;

    #[test]
    fn success_with_payload_and_message() {
        let body = br#"{"message":"ok","userData":[{"id":"1"}]}"#;
        let mut envelope = decode(StatusCode::OK, body).unwrap();
        assert_eq!(envelope.message().as_deref(), Some("ok"));
        let users: Vec<Value> = envelope.take("userData").unwrap();
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn error_status_carries_server_message() {
        let err =
            decode(StatusCode::INTERNAL_SERVER_ERROR, br#"{"message":"locked"}"#).unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Status);
        assert_eq!(err.http_status(), Some(500));
        assert_eq!(err.server_message(), Some("locked"));
    }

    #[test]
    fn error_status_with_html_body_has_no_message() {
        let err = decode(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.http_status(), Some(502));
        assert!(err.server_message().is_none());
    }

    #[test]
    fn success_with_non_json_body_is_a_decode_error() {
        let err = decode(StatusCode::OK, b"<html></html>").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Decode);
    }

    #[test]
    fn success_with_json_array_is_a_decode_error() {
        let err = decode(StatusCode::OK, b"[1,2]").unwrap_err();
        assert!(err.detail().contains("an array"));
    }

    #[test]
    fn no_content_is_an_empty_envelope() {
        let envelope = decode(StatusCode::NO_CONTENT, b"").unwrap();
        assert!(envelope.message().is_none());
    }

    #[test]
    fn missing_payload_is_a_decode_error() {
        let mut envelope = decode(StatusCode::OK, br#"{"message":"ok"}"#).unwrap();
        let err = envelope.take::<Vec<Value>>("userData").unwrap_err();
        assert_eq!(err.kind(), FetchErrorKind::Decode);
        assert!(envelope.take_optional::<Value>("userData").unwrap().is_none());
    }

    #[test]
    fn favorite_flag_top_level_and_nested() {
        let top = decode(StatusCode::OK, br#"{"isFavorited":true}"#).unwrap();
        assert_eq!(top.favorite_flag("userData"), Some(true));

        let nested = decode(StatusCode::OK, br#"{"userData":{"favorited":false}}"#).unwrap();
        assert_eq!(nested.favorite_flag("userData"), Some(false));

        let none = decode(StatusCode::OK, br#"{"message":"done"}"#).unwrap();
        assert_eq!(none.favorite_flag("userData"), None);
    }
}
