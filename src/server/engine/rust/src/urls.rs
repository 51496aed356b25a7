/* src/server/engine/rust/src/urls.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::origin::{SiteEnv, join_url, normalize_origin, resolve_site_url};
use crate::path::{localized_path, match_path, normalize_path, strip_locale_prefix};
use crate::routes::{RouteParams, RouteTable};

pub const X_DEFAULT: &str = "x-default";

/// Whether public URLs carry a leading `/{locale}` segment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalePrefix {
  #[default]
  Never,
  Always,
}

/// Hreflang tag -> absolute URL. One entry per locale plus `x-default`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HreflangAlternates(BTreeMap<String, String>);

impl HreflangAlternates {
  pub fn empty() -> Self {
    Self(BTreeMap::new())
  }

  pub fn get(&self, tag: &str) -> Option<&str> {
    self.0.get(tag).map(String::as_str)
  }

  pub fn x_default(&self) -> Option<&str> {
    self.get(X_DEFAULT)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

/// URL context for one site deployment: resolved origin, prefix policy and
/// route table. Built once per process and shared by request handlers.
#[derive(Debug, Clone)]
pub struct SiteUrls {
  origin: String,
  prefix: LocalePrefix,
  table: RouteTable,
}

impl SiteUrls {
  pub fn new(origin: &str) -> Self {
    Self {
      origin: normalize_origin(origin),
      prefix: LocalePrefix::Never,
      table: RouteTable::builtin(),
    }
  }

  pub fn from_site_env(env: &SiteEnv) -> Self {
    Self::new(&resolve_site_url(env))
  }

  pub fn from_env() -> Self {
    Self::from_site_env(&SiteEnv::from_env())
  }

  pub fn with_locale_prefix(mut self, prefix: LocalePrefix) -> Self {
    self.prefix = prefix;
    self
  }

  pub fn with_table(mut self, table: RouteTable) -> Self {
    self.table = table;
    self
  }

  pub fn origin(&self) -> &str {
    &self.origin
  }

  pub fn locale_prefix(&self) -> LocalePrefix {
    self.prefix
  }

  pub fn table(&self) -> &RouteTable {
    &self.table
  }

  pub fn localized_path(&self, key: &str, locale: Locale, params: Option<&RouteParams>) -> String {
    localized_path(&self.table, key, locale, params)
  }

  /// Apply the prefix policy to an already-normalized path.
  fn public_path(&self, path: &str, locale: Locale) -> String {
    match self.prefix {
      LocalePrefix::Never => path.to_string(),
      LocalePrefix::Always if strip_locale_prefix(path, locale) != path => path.to_string(),
      LocalePrefix::Always if path == "/" => format!("/{locale}"),
      LocalePrefix::Always => format!("/{locale}{path}"),
    }
  }

  /// Absolute URL for a route. Without a locale prefix, removing the origin
  /// gives back exactly [`SiteUrls::localized_path`].
  pub fn localized_url(&self, key: &str, locale: Locale, params: Option<&RouteParams>) -> String {
    let path = self.localized_path(key, locale, params);
    join_url(&self.origin, &self.public_path(&path, locale))
  }

  pub fn canonical_url(&self, path: &str, locale: Locale) -> String {
    let path = normalize_path(path);
    join_url(&self.origin, &self.public_path(&path, locale))
  }

  /// Alternates for the logical route behind `path` (a `locale` path).
  /// Paths outside the route table are treated as identical in every locale.
  pub fn hreflang_alternates(&self, path: &str, locale: Locale) -> HreflangAlternates {
    let normalized = normalize_path(path);
    let bare = match self.prefix {
      LocalePrefix::Always => strip_locale_prefix(&normalized, locale).to_string(),
      LocalePrefix::Never => normalized,
    };
    let matched = match_path(&self.table, &bare, locale);

    let mut map = BTreeMap::new();
    for target in Locale::ALL {
      let target_path = match matched {
        Some(ref m) => self.localized_path(m.key, target, Some(&m.params)),
        None => bare.clone(),
      };
      map.insert(target.as_str().to_string(), self.canonical_url(&target_path, target));
    }
    if let Some(default_url) = map.get(Locale::DEFAULT.as_str()).cloned() {
      map.insert(X_DEFAULT.to_string(), default_url);
    }
    HreflangAlternates(map)
  }

  /// Alternates for a route key directly, skipping the inverse lookup.
  pub fn route_alternates(&self, key: &str, params: Option<&RouteParams>) -> HreflangAlternates {
    let mut map = BTreeMap::new();
    for target in Locale::ALL {
      map.insert(target.as_str().to_string(), self.localized_url(key, target, params));
    }
    if let Some(default_url) = map.get(Locale::DEFAULT.as_str()).cloned() {
      map.insert(X_DEFAULT.to_string(), default_url);
    }
    HreflangAlternates(map)
  }
}

fn one_shot(base_url: Option<&str>) -> SiteUrls {
  match base_url {
    Some(base) => SiteUrls::new(base),
    None => SiteUrls::from_env(),
  }
}

/// Absolute localized URL; `base_url` overrides the environment origin.
pub fn build_localized_url(
  route_key: &str,
  locale: Locale,
  params: Option<&RouteParams>,
  base_url: Option<&str>,
) -> String {
  one_shot(base_url).localized_url(route_key, locale, params)
}

pub fn generate_canonical_url(path: &str, locale: Locale, base_url: Option<&str>) -> String {
  one_shot(base_url).canonical_url(path, locale)
}

pub fn generate_hreflang_alternates_for_metadata(
  path: &str,
  locale: Locale,
  base_url: Option<&str>,
) -> HreflangAlternates {
  one_shot(base_url).hreflang_alternates(path, locale)
}
