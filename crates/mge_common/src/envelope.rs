//! Normalisation of backend response bodies.
//!
//! The backend is not consistent about where it puts the payload. Depending on
//! the endpoint a body looks like `{"status": "success", "data": {...}}`,
//! `{"success": true, "message": "...", "data": [...]}`, `{"faq": {...}}`, a
//! paginated `{"data": {"current_page": 1, "data": [...]}}`, or just the bare
//! object. Everything funnels through [`ResponseEnvelope::from_value`] and
//! [`normalize`] so call sites deal with typed values only.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{external_service_error, MgeError};

/// Outcome of a backend body that came back with a 2xx status.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    Success(Value),
    Failure { message: String },
}

impl ResponseEnvelope {
    /// Classifies a JSON body as success or failure.
    ///
    /// A body is a failure when `success` is `false`, or when `status` is
    /// `"error"`, `"fail"` or `"failed"` (case-insensitive) on an envelope.
    /// An object with an `id` and neither `data` nor `message` is a bare
    /// record and its `status` is left alone.
    pub fn from_value(value: Value) -> Self {
        if let Value::Object(map) = &value {
            // A bare record (e.g. a booking) has its own `status` field
            let is_envelope =
                map.contains_key("data") || map.contains_key("message") || !map.contains_key("id");
            let failed_status = is_envelope
                && map
                    .get("status")
                    .and_then(Value::as_str)
                    .map(|s| matches!(s.to_ascii_lowercase().as_str(), "error" | "fail" | "failed"))
                    .unwrap_or(false);
            let failed_flag = map.get("success").and_then(Value::as_bool) == Some(false);

            if failed_status || failed_flag {
                let message = map
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("backend reported a failure")
                    .to_string();
                return ResponseEnvelope::Failure { message };
            }
        }
        ResponseEnvelope::Success(value)
    }

    /// Returns the success payload or turns a failure into an error.
    pub fn into_result(self) -> Result<Value, MgeError> {
        match self {
            ResponseEnvelope::Success(value) => Ok(value),
            ResponseEnvelope::Failure { message } => Err(external_service_error("backend", message)),
        }
    }
}

/// Picks the payload out of a successful body.
///
/// Lookup order: `data`, then `key` (e.g. `"faq"`), then the body itself.
/// A paginated payload is unwrapped to its inner `data` array.
pub fn extract_payload(value: Value, key: Option<&str>) -> Value {
    let payload = match value {
        Value::Object(mut map) => {
            if map.get("data").is_some_and(|data| !data.is_null()) {
                map.remove("data").unwrap_or(Value::Null)
            } else if let Some(inner) = key.and_then(|key| map.remove(key)) {
                inner
            } else {
                Value::Object(map)
            }
        }
        other => other,
    };

    match payload {
        Value::Object(mut map) if map.contains_key("current_page") && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Classifies, extracts and deserializes a backend body in one step.
pub fn normalize<T: DeserializeOwned>(value: Value, key: Option<&str>) -> Result<T, MgeError> {
    let payload = ResponseEnvelope::from_value(value).into_result()?;
    let payload = extract_payload(payload, key);
    serde_json::from_value(payload).map_err(MgeError::from)
}
