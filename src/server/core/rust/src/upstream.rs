/* src/server/core/rust/src/upstream.rs */

use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::Value;

pub const TOTAL_HEADER: &str = "x-wp-total";
pub const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// Collection totals reported by upstream headers. Never derived from rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
  pub total: u64,
  pub total_pages: u64,
}

impl Pagination {
  pub fn from_headers(headers: &HeaderMap) -> Self {
    let read = |name: &str| {
      headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
    };
    Self { total: read(TOTAL_HEADER), total_pages: read(TOTAL_PAGES_HEADER) }
  }
}

/// Result of one upstream request that got an HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamFetchOutcome {
  Success { payload: Value, pagination: Pagination, endpoint: String },
  Failure { status: u16, status_text: String, message: String, endpoint: String },
}

impl UpstreamFetchOutcome {
  pub fn is_success(&self) -> bool {
    matches!(self, Self::Success { .. })
  }

  pub fn endpoint(&self) -> &str {
    match self {
      Self::Success { endpoint, .. } | Self::Failure { endpoint, .. } => endpoint,
    }
  }

  /// HTTP status and reason phrase; successes report `200 OK`.
  pub fn status(&self) -> (u16, &str) {
    match self {
      Self::Success { .. } => (200, "OK"),
      Self::Failure { status, status_text, .. } => (*status, status_text),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use reqwest::header::HeaderValue;

  #[test]
  fn reads_headers_case_insensitively() {
    let mut headers = HeaderMap::new();
    headers.insert("X-WP-Total", HeaderValue::from_static("42"));
    headers.insert("X-WP-TotalPages", HeaderValue::from_static(" 5 "));
    assert_eq!(Pagination::from_headers(&headers), Pagination { total: 42, total_pages: 5 });
  }

  #[test]
  fn missing_or_garbage_headers_are_zero() {
    assert_eq!(Pagination::from_headers(&HeaderMap::new()), Pagination::default());
    let mut headers = HeaderMap::new();
    headers.insert("x-wp-total", HeaderValue::from_static("many"));
    assert_eq!(Pagination::from_headers(&headers).total, 0);
  }

  #[test]
  fn outcome_accessors() {
    let ok = UpstreamFetchOutcome::Success {
      payload: Value::Null,
      pagination: Pagination::default(),
      endpoint: "http://wp/posts".into(),
    };
    assert!(ok.is_success());
    assert_eq!(ok.status(), (200, "OK"));

    let failed = UpstreamFetchOutcome::Failure {
      status: 503,
      status_text: "Service Unavailable".into(),
      message: String::new(),
      endpoint: "http://wp/categories".into(),
    };
    assert_eq!(failed.status(), (503, "Service Unavailable"));
    assert_eq!(failed.endpoint(), "http://wp/categories");
  }
}
