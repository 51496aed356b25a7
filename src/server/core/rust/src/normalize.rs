/* src/server/core/rust/src/normalize.rs */

use serde::Serialize;
use serde_json::Value;

/// Upstream payload classified once at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedPayload {
  Records { records: Vec<Value>, meta: Option<Value> },
  UnrecognizedShape(Value),
}

impl ParsedPayload {
  /// `{ data: [...], meta? }` as returned by the CMS.
  pub fn from_envelope(raw: Value) -> Self {
    let Value::Object(mut obj) = raw else { return Self::UnrecognizedShape(raw) };
    match obj.remove("data") {
      Some(Value::Array(records)) => {
        let meta = obj.remove("meta").filter(|m| !m.is_null());
        Self::Records { records, meta }
      }
      Some(data) => {
        obj.insert("data".into(), data);
        Self::UnrecognizedShape(Value::Object(obj))
      }
      None => Self::UnrecognizedShape(Value::Object(obj)),
    }
  }

  /// A bare JSON array as returned by WordPress collections.
  pub fn from_collection(raw: Value) -> Self {
    match raw {
      Value::Array(records) => Self::Records { records, meta: None },
      other => Self::UnrecognizedShape(other),
    }
  }

  fn describe(raw: &Value) -> &'static str {
    match raw {
      Value::Null => "null",
      Value::Bool(_) => "boolean",
      Value::Number(_) => "number",
      Value::String(_) => "string",
      Value::Array(_) => "array",
      Value::Object(_) => "object",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResponse<T> {
  pub data: Vec<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub meta: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl<T> NormalizedResponse<T> {
  pub fn is_ok(&self) -> bool {
    self.error.is_none()
  }
}

/// Apply `transform` to every record; rejected records are dropped.
/// An unrecognized payload yields empty data and an error reason.
pub fn normalize_payload<T>(
  payload: ParsedPayload,
  transform: impl Fn(&Value) -> Option<T>,
) -> NormalizedResponse<T> {
  match payload {
    ParsedPayload::Records { records, meta } => {
      let total = records.len();
      let data: Vec<T> = records.iter().filter_map(&transform).collect();
      if data.len() < total {
        let skipped = total - data.len();
        tracing::warn!(skipped, total, "dropped records rejected by transform");
      }
      NormalizedResponse { data, meta, error: None }
    }
    ParsedPayload::UnrecognizedShape(raw) => {
      let reason = format!("unrecognized response shape: {}", ParsedPayload::describe(&raw));
      tracing::warn!(%reason, "upstream payload not normalized");
      NormalizedResponse { data: Vec::new(), meta: None, error: Some(reason) }
    }
  }
}

/// Normalize a CMS envelope response.
pub fn normalize_api_response<T>(
  raw: Value,
  transform: impl Fn(&Value) -> Option<T>,
) -> NormalizedResponse<T> {
  normalize_payload(ParsedPayload::from_envelope(raw), transform)
}

/// Normalize a bare-array collection response.
pub fn normalize_collection<T>(
  raw: Value,
  transform: impl Fn(&Value) -> Option<T>,
) -> NormalizedResponse<T> {
  normalize_payload(ParsedPayload::from_collection(raw), transform)
}
