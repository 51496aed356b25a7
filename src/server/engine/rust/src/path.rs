/* src/server/engine/rust/src/path.rs */

use crate::encode::{decode_segment, encode_segment};
use crate::locale::Locale;
use crate::routes::{RouteParams, RouteTable};

/// Resolve a route key to its locale-specific path using the built-in table.
///
/// Never fails: unknown keys degrade to `/{key}`, missing placeholder values
/// become empty segments. Both cases are logged as warnings.
pub fn get_localized_path(route_key: &str, locale: Locale, params: Option<&RouteParams>) -> String {
  localized_path(&RouteTable::builtin(), route_key, locale, params)
}

pub fn localized_path(
  table: &RouteTable,
  route_key: &str,
  locale: Locale,
  params: Option<&RouteParams>,
) -> String {
  let Some(template) = table.get(route_key).and_then(|r| r.template(locale)) else {
    tracing::warn!(route_key, %locale, "unknown route key, using key as path");
    return normalize_path(&format!("/{}", encode_segment(route_key)));
  };
  normalize_path(&substitute(template, route_key, params))
}

/// Replace every `{name}` with the percent-encoded param value.
fn substitute(template: &str, route_key: &str, params: Option<&RouteParams>) -> String {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;
  while let Some(start) = rest.find('{') {
    let after = &rest[start + 1..];
    let Some(end) = after.find('}') else { break };
    out.push_str(&rest[..start]);
    let name = &after[..end];
    match params.and_then(|p| p.get(name)) {
      Some(value) => out.push_str(&encode_segment(value)),
      None => {
        tracing::warn!(route_key, param = name, "missing route param, substituting empty segment");
      }
    }
    rest = &after[end + 1..];
  }
  out.push_str(rest);
  out
}

/// Normalize a site path: `\` to `/`, single leading slash, no duplicate
/// slashes, no trailing slash except for the root.
pub fn normalize_path(path: &str) -> String {
  let mut out = String::with_capacity(path.len() + 1);
  for ch in path.trim().chars() {
    let ch = if ch == '\\' { '/' } else { ch };
    if ch == '/' && out.ends_with('/') {
      continue;
    }
    if out.is_empty() && ch != '/' {
      out.push('/');
    }
    out.push(ch);
  }
  if out.len() > 1 && out.ends_with('/') {
    out.pop();
  }
  if out.is_empty() {
    out.push('/');
  }
  out
}

/// Remove a leading `/{locale}` segment, if present.
pub fn strip_locale_prefix(path: &str, locale: Locale) -> &str {
  let prefix = locale.as_str();
  match path.strip_prefix('/').and_then(|p| p.strip_prefix(prefix)) {
    Some("") => "/",
    Some(rest) if rest.starts_with('/') => rest,
    _ => path,
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
  pub key: &'static str,
  pub params: RouteParams,
}

/// Inverse lookup: find the route whose `locale` template matches `path`.
///
/// When several templates match, the one with the most literal segments wins
/// (`/articles/hub` is `articles-hub`, not `articles-detail` with slug `hub`).
pub fn match_path(table: &RouteTable, path: &str, locale: Locale) -> Option<RouteMatch> {
  let normalized = normalize_path(path);
  let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

  let mut best: Option<(usize, RouteMatch)> = None;
  for route in table.routes() {
    let Some(template) = route.template(locale) else { continue };
    let parts: Vec<&str> = template.split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() != segments.len() {
      continue;
    }

    let mut params = RouteParams::new();
    let mut literals = 0;
    let matched = parts.iter().zip(&segments).all(|(part, seg)| {
      match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
        Some(name) => {
          params.insert(name, decode_segment(seg));
          true
        }
        None => {
          literals += 1;
          part == seg
        }
      }
    });

    if matched && best.as_ref().is_none_or(|(score, _)| literals > *score) {
      best = Some((literals, RouteMatch { key: route.key, params }));
    }
  }
  best.map(|(_, m)| m)
}

/// Inverse lookup against the built-in table.
pub fn page_key_from_path(path: &str, locale: Locale) -> Option<RouteMatch> {
  match_path(&RouteTable::builtin(), path, locale)
}

/// Rewrite a path from one locale's URL space into another's.
/// Paths that match no route are returned normalized but otherwise unchanged.
pub fn translate_path(path: &str, from: Locale, to: Locale) -> String {
  let table = RouteTable::builtin();
  match match_path(&table, path, from) {
    Some(m) => localized_path(&table, m.key, to, Some(&m.params)),
    None => normalize_path(path),
  }
}
