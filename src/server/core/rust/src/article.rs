/* src/server/core/rust/src/article.rs */

use busbar_engine::Locale;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_AUTHOR_NAME: &str = "Anonymous";
pub const DEFAULT_CATEGORY_NAME: &str = "Uncategorized";
pub const DEFAULT_CATEGORY_SLUG: &str = "uncategorized";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaRef {
  pub id: u64,
  pub url: String,
  pub alternative_text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub width: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub height: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorRef {
  pub id: u64,
  pub name: String,
  pub avatar_url: String,
}

impl Default for AuthorRef {
  fn default() -> Self {
    Self { id: 0, name: DEFAULT_AUTHOR_NAME.to_string(), avatar_url: String::new() }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryRef {
  pub id: u64,
  pub name: String,
  pub slug: String,
}

impl Default for CategoryRef {
  fn default() -> Self {
    Self {
      id: 0,
      name: DEFAULT_CATEGORY_NAME.to_string(),
      slug: DEFAULT_CATEGORY_SLUG.to_string(),
    }
  }
}

/// One article in the internal shape shared by both upstreams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedArticle {
  pub id: u64,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub slug: String,
  #[serde(default)]
  pub excerpt: String,
  #[serde(default)]
  pub content: String,
  #[serde(default)]
  pub cover: Option<MediaRef>,
  #[serde(default)]
  pub author: AuthorRef,
  #[serde(default)]
  pub category: CategoryRef,
  #[serde(default)]
  pub published_at: Option<String>,
  #[serde(default)]
  pub locale: Locale,
}

impl NormalizedArticle {
  /// Read back a record that is already in normalized form.
  pub fn from_value(value: &Value) -> Option<Self> {
    match serde_json::from_value(value.clone()) {
      Ok(article) => Some(article),
      Err(e) => {
        tracing::warn!(error = %e, "skipping record that is not a normalized article");
        None
      }
    }
  }
}

// -- Loose JSON accessors shared by the upstream transforms --

/// Numeric id, accepting integer or numeric-string encodings.
pub(crate) fn id_of(value: &Value) -> Option<u64> {
  match value {
    Value::Number(n) => n.as_u64(),
    Value::String(s) => s.trim().parse().ok(),
    _ => None,
  }
}

/// First non-empty string among `keys`.
pub(crate) fn str_field(obj: &Value, keys: &[&str]) -> Option<String> {
  keys
    .iter()
    .filter_map(|k| obj.get(*k).and_then(Value::as_str))
    .find(|s| !s.is_empty())
    .map(str::to_string)
}

pub(crate) fn u64_field(obj: &Value, key: &str) -> Option<u64> {
  obj.get(key).and_then(Value::as_u64)
}

pub(crate) fn locale_field(obj: &Value, key: &str) -> Locale {
  Locale::parse_or_default(obj.get(key).and_then(Value::as_str))
}
