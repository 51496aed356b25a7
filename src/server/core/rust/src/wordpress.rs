/* src/server/core/rust/src/wordpress.rs */

use busbar_engine::{Locale, strip_html};
use serde_json::Value;

use crate::article::{
  AuthorRef, CategoryRef, DEFAULT_AUTHOR_NAME, DEFAULT_CATEGORY_NAME, DEFAULT_CATEGORY_SLUG,
  MediaRef, NormalizedArticle, id_of, str_field, u64_field,
};

/// `field.rendered`, or the field itself when WordPress returns a plain string.
fn rendered(obj: &Value, key: &str) -> String {
  match obj.get(key) {
    Some(Value::String(s)) => s.clone(),
    Some(v) => v.get("rendered").and_then(Value::as_str).unwrap_or_default().to_string(),
    None => String::new(),
  }
}

fn embedded<'a>(post: &'a Value, rel: &str) -> Option<&'a Value> {
  post.get("_embedded")?.get(rel)?.as_array()?.first()
}

fn author(post: &Value) -> AuthorRef {
  let Some(a) = embedded(post, "author") else { return AuthorRef::default() };
  let avatar_url = a
    .get("avatar_urls")
    .and_then(Value::as_object)
    .and_then(|urls| urls.get("96").or_else(|| urls.values().last()))
    .and_then(Value::as_str)
    .unwrap_or_default()
    .to_string();
  AuthorRef {
    id: a.get("id").and_then(id_of).unwrap_or(0),
    name: str_field(a, &["name"]).unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string()),
    avatar_url,
  }
}

fn featured_media(post: &Value) -> Option<MediaRef> {
  let m = embedded(post, "wp:featuredmedia")?;
  let url = str_field(m, &["source_url"])?;
  let details = m.get("media_details");
  Some(MediaRef {
    id: m.get("id").and_then(id_of).unwrap_or(0),
    url,
    alternative_text: str_field(m, &["alt_text"]).unwrap_or_default(),
    width: details.and_then(|d| u64_field(d, "width")),
    height: details.and_then(|d| u64_field(d, "height")),
  })
}

/// First term of the first taxonomy group (categories come first in `wp:term`).
fn first_term(post: &Value) -> CategoryRef {
  embedded(post, "wp:term")
    .and_then(Value::as_array)
    .and_then(|terms| terms.first())
    .and_then(transform_category)
    .unwrap_or_default()
}

/// Transform one WordPress post. Records without an id are rejected.
pub fn transform_post(post: &Value) -> Option<NormalizedArticle> {
  let Some(id) = post.get("id").and_then(id_of) else {
    tracing::warn!("skipping WordPress post without id");
    return None;
  };

  let published = match post.get("status").and_then(Value::as_str) {
    None => true,
    Some(status) => status == "publish",
  };
  let published_at = if published { str_field(post, &["date_gmt", "date"]) } else { None };

  let locale = Locale::parse_or_default(
    post.get("acf").and_then(|acf| acf.get("article_locale")).and_then(Value::as_str),
  );

  Some(NormalizedArticle {
    id,
    title: rendered(post, "title"),
    slug: str_field(post, &["slug"]).unwrap_or_default(),
    excerpt: strip_html(&rendered(post, "excerpt")),
    content: rendered(post, "content"),
    cover: featured_media(post),
    author: author(post),
    category: first_term(post),
    published_at,
    locale,
  })
}

/// Transform one WordPress category (or embedded term).
pub fn transform_category(term: &Value) -> Option<CategoryRef> {
  let id = term.get("id").and_then(id_of)?;
  Some(CategoryRef {
    id,
    name: str_field(term, &["name"]).unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string()),
    slug: str_field(term, &["slug"]).unwrap_or_else(|| DEFAULT_CATEGORY_SLUG.to_string()),
  })
}
