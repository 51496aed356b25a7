/* src/server/core/rust/src/errors.rs */

use std::fmt;

use serde_json::{Map, Value};

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
pub const UPSTREAM_ERROR: &str = "UpstreamError";
pub const PROXY_ROUTE_ERROR: &str = "ProxyRouteError";
pub const UNRECOGNIZED_SHAPE: &str = "UnrecognizedShape";
pub const WORDPRESS_API_ERROR: &str = "WordPress API error";

fn default_status(code: &str) -> u16 {
  match code {
    VALIDATION_ERROR => 400,
    NOT_FOUND => 404,
    PROXY_ROUTE_ERROR | WORDPRESS_API_ERROR => 502,
    _ => 500,
  }
}

/// Error carried from upstream clients and handlers to the route boundary.
///
/// `code` becomes the `error` field of the JSON body; `detail` entries are
/// merged next to it.
#[derive(Debug, Clone)]
pub struct SiteError {
  code: String,
  message: String,
  status: u16,
  detail: Map<String, Value>,
}

impl SiteError {
  pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status, detail: Map::new() }
  }

  pub fn with_status(mut self, status: u16) -> Self {
    self.status = status;
    self
  }

  pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.detail.insert(key.into(), value.into());
    self
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::new(VALIDATION_ERROR, msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::new(NOT_FOUND, msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::new(INTERNAL_ERROR, msg)
  }

  /// Non-2xx from the CMS; the upstream status is kept as the response status.
  pub fn upstream(status: u16, status_text: &str, message: impl Into<String>) -> Self {
    Self::new(UPSTREAM_ERROR, message)
      .with_status(status)
      .with_detail("status", status)
      .with_detail("statusText", status_text)
  }

  /// Network or decode failure while talking to an upstream.
  pub fn proxy_route(msg: impl Into<String>) -> Self {
    Self::new(PROXY_ROUTE_ERROR, msg)
  }

  pub fn unrecognized_shape(msg: impl Into<String>) -> Self {
    Self::new(UNRECOGNIZED_SHAPE, msg)
  }

  pub fn wordpress_api(info: Value) -> Self {
    Self::new(WORDPRESS_API_ERROR, "").with_detail("info", info)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  pub fn detail(&self) -> &Map<String, Value> {
    &self.detail
  }

  /// JSON envelope: `{ error, message?, ...detail }`.
  pub fn to_body(&self) -> Value {
    let mut body = Map::new();
    body.insert("error".into(), Value::String(self.code.clone()));
    if !self.message.is_empty() {
      body.insert("message".into(), Value::String(self.message.clone()));
    }
    for (k, v) in &self.detail {
      body.insert(k.clone(), v.clone());
    }
    Value::Object(body)
  }
}

impl fmt::Display for SiteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for SiteError {}
