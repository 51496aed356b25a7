/* src/server/core/rust/src/strapi.rs */

use serde_json::{Map, Value};

use crate::article::{
  AuthorRef, CategoryRef, DEFAULT_AUTHOR_NAME, DEFAULT_CATEGORY_NAME, DEFAULT_CATEGORY_SLUG,
  MediaRef, NormalizedArticle, id_of, locale_field, str_field, u64_field,
};

const TEXT_BLOCKS: [&str; 2] = ["shared.rich-text", "shared.quote"];

/// Flatten a v4 `{ id, attributes }` record into a single object; v5 records
/// are already flat.
fn flatten(record: &Value) -> Option<Value> {
  let obj = record.as_object()?;
  match obj.get("attributes").and_then(Value::as_object) {
    Some(attrs) => {
      let mut flat: Map<String, Value> = attrs.clone();
      if let Some(id) = obj.get("id") {
        flat.insert("id".into(), id.clone());
      }
      Some(Value::Object(flat))
    }
    None => Some(record.clone()),
  }
}

/// Unwrap a relation field. Accepts v4 `{ data: { id, attributes } }`,
/// `{ data: null }` and plain v5 objects.
fn relation(value: Option<&Value>) -> Option<Value> {
  let value = value?;
  match value.get("data") {
    Some(Value::Null) => None,
    Some(data) if data.is_object() => flatten(data),
    Some(_) => None,
    None => flatten(value),
  }
}

fn media(value: &Value) -> MediaRef {
  MediaRef {
    id: value.get("id").and_then(id_of).unwrap_or(0),
    url: str_field(value, &["url", "src"]).unwrap_or_default(),
    alternative_text: str_field(value, &["alternativeText", "alt"]).unwrap_or_default(),
    width: u64_field(value, "width"),
    height: u64_field(value, "height"),
  }
}

fn author(value: Option<Value>) -> AuthorRef {
  let Some(value) = value else { return AuthorRef::default() };
  AuthorRef {
    id: value.get("id").and_then(id_of).unwrap_or(0),
    name: str_field(&value, &["name"]).unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string()),
    avatar_url: relation(value.get("avatar"))
      .and_then(|a| str_field(&a, &["url"]))
      .unwrap_or_default(),
  }
}

fn category(value: Option<Value>) -> CategoryRef {
  let Some(value) = value else { return CategoryRef::default() };
  CategoryRef {
    id: value.get("id").and_then(id_of).unwrap_or(0),
    name: str_field(&value, &["name"]).unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string()),
    slug: str_field(&value, &["slug"]).unwrap_or_else(|| DEFAULT_CATEGORY_SLUG.to_string()),
  }
}

/// Text bodies of rich-text and quote blocks, in order, blank-line separated.
fn block_text(blocks: Option<&Value>) -> String {
  let Some(blocks) = blocks.and_then(Value::as_array) else { return String::new() };
  blocks
    .iter()
    .filter(|b| {
      b.get("__component").and_then(Value::as_str).is_some_and(|c| TEXT_BLOCKS.contains(&c))
    })
    .filter_map(|b| str_field(b, &["body"]))
    .collect::<Vec<_>>()
    .join("\n\n")
}

/// Transform one CMS article record. Records without an id are rejected.
pub fn transform_article(record: &Value) -> Option<NormalizedArticle> {
  let flat = flatten(record)?;
  let Some(id) = flat.get("id").and_then(id_of) else {
    tracing::warn!("skipping CMS article without id");
    return None;
  };

  let content = match str_field(&flat, &["content"]) {
    Some(content) => content,
    None => block_text(flat.get("blocks")),
  };

  Some(NormalizedArticle {
    id,
    title: str_field(&flat, &["title"]).unwrap_or_default(),
    slug: str_field(&flat, &["slug"]).unwrap_or_default(),
    excerpt: str_field(&flat, &["description", "excerpt"]).unwrap_or_default(),
    content,
    cover: relation(flat.get("cover")).map(|c| media(&c)),
    author: author(relation(flat.get("author"))),
    category: category(relation(flat.get("category"))),
    published_at: str_field(&flat, &["publishedAt"]),
    locale: locale_field(&flat, "locale"),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use busbar_engine::Locale;
  use serde_json::json;

  #[test]
  fn flat_v5_record() {
    let raw = json!({
      "id": 4,
      "documentId": "abc",
      "title": "Busbar vs cable",
      "slug": "busbar-vs-cable",
      "description": "Short summary",
      "publishedAt": "2024-06-01T10:00:00.000Z",
      "locale": "es",
      "cover": {
        "id": 9,
        "url": "/uploads/c.jpg",
        "alternativeText": "cover",
        "width": 800,
        "height": 600
      },
      "author": {"id": 2, "name": "Ana", "avatar": {"url": "/uploads/ana.png"}},
      "category": {"id": 5, "name": "Guides", "slug": "guides"},
      "blocks": [
        {"__component": "shared.rich-text", "id": 1, "body": "First"},
        {"__component": "shared.media", "id": 2, "file": {"url": "/x.png"}},
        {"__component": "shared.quote", "id": 3, "title": "Q", "body": "Second"}
      ]
    });
    let a = transform_article(&raw).unwrap();
    assert_eq!(a.id, 4);
    assert_eq!(a.excerpt, "Short summary");
    assert_eq!(a.content, "First\n\nSecond");
    assert_eq!(a.cover.as_ref().map(|c| c.width), Some(Some(800)));
    assert_eq!(a.author.avatar_url, "/uploads/ana.png");
    assert_eq!(a.category.slug, "guides");
    assert_eq!(a.locale, Locale::Es);
  }

  #[test]
  fn v4_record_with_wrapped_relations() {
    let raw = json!({
      "id": 11,
      "attributes": {
        "title": "Retrofit",
        "slug": "retrofit",
        "content": "<p>Body</p>",
        "cover": {"data": {"id": 3, "attributes": {"url": "/r.jpg", "alt": "r"}}},
        "author": {"data": {"id": 8, "attributes": {"name": "Luis", "avatar": {"data": null}}}},
        "category": {"data": null}
      }
    });
    let a = transform_article(&raw).unwrap();
    assert_eq!(a.id, 11);
    assert_eq!(a.content, "<p>Body</p>");
    let cover = a.cover.unwrap();
    assert_eq!((cover.id, cover.url.as_str(), cover.alternative_text.as_str()), (3, "/r.jpg", "r"));
    assert_eq!(a.author.name, "Luis");
    assert_eq!(a.author.avatar_url, "");
    assert_eq!(a.category, CategoryRef::default());
    assert_eq!(a.locale, Locale::En);
    assert!(a.published_at.is_none());
  }

  #[test]
  fn missing_relations_take_defaults() {
    let a = transform_article(&json!({"id": "21", "title": "t"})).unwrap();
    assert_eq!(a.id, 21);
    assert!(a.cover.is_none());
    assert_eq!(a.author.name, "Anonymous");
    assert_eq!(a.category.name, "Uncategorized");
    assert_eq!(a.content, "");
  }

  #[test]
  fn rejects_records_without_id() {
    assert!(transform_article(&json!({"title": "orphan"})).is_none());
    assert!(transform_article(&json!({"attributes": {"title": "orphan"}})).is_none());
    assert!(transform_article(&json!(null)).is_none());
  }
}
