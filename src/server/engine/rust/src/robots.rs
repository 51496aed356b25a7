/* src/server/engine/rust/src/robots.rs */

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::origin::{FALLBACK_ORIGIN, SiteEnv, join_url};
use crate::sitemap::SITEMAP_PATH;
use crate::urls::{LocalePrefix, SiteUrls};

/// Whether crawlers may index this deployment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indexing {
  #[default]
  Allow,
  Block,
}

impl Indexing {
  /// Preview deployments and development servers are never indexed.
  pub fn from_site_env(env: &SiteEnv) -> Self {
    if env.preview || env.development { Self::Block } else { Self::Allow }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Allow => "allow",
      Self::Block => "block",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
  pub allow: Vec<String>,
  pub disallow: Vec<String>,
  pub host: String,
  pub sitemap: String,
}

impl RobotsPolicy {
  /// Indexed sites allow everything except the API and legacy prefixed
  /// paths. Blocked sites disallow `/` and advertise the production host.
  pub fn new(urls: &SiteUrls, indexing: Indexing) -> Self {
    let host = match indexing {
      Indexing::Allow => urls.origin().to_string(),
      Indexing::Block => FALLBACK_ORIGIN.to_string(),
    };
    let sitemap = join_url(&host, SITEMAP_PATH);
    match indexing {
      Indexing::Allow => {
        let mut disallow = vec!["/api/".to_string()];
        disallow.extend(legacy_locale_paths(urls));
        Self { allow: vec!["/".to_string()], disallow, host, sitemap }
      }
      Indexing::Block => Self { allow: Vec::new(), disallow: vec!["/".to_string()], host, sitemap },
    }
  }

  /// `robots.txt` body.
  pub fn render(&self) -> String {
    let mut out = String::from("User-Agent: *\n");
    for path in &self.allow {
      out.push_str(&format!("Allow: {path}\n"));
    }
    for path in &self.disallow {
      out.push_str(&format!("Disallow: {path}\n"));
    }
    out.push_str(&format!("\nHost: {}\nSitemap: {}\n", self.host, self.sitemap));
    out
  }
}

/// Default-locale segments reached under another locale's prefix, e.g.
/// `/es/products` while the Spanish section lives at `/es/productos`.
/// Only prefixed deployments can serve such paths.
pub fn legacy_locale_paths(urls: &SiteUrls) -> Vec<String> {
  if urls.locale_prefix() == LocalePrefix::Never {
    return Vec::new();
  }
  let mut paths = BTreeSet::new();
  for route in urls.table().routes() {
    let Some(default) = route.template(Locale::DEFAULT).map(literal_prefix) else { continue };
    if default.is_empty() {
      continue;
    }
    for locale in Locale::ALL.into_iter().filter(|l| *l != Locale::DEFAULT) {
      if route.template(locale).map(literal_prefix) != Some(default) {
        paths.insert(format!("/{locale}{default}"));
      }
    }
  }
  paths.into_iter().collect()
}

/// Template up to its first placeholder, without a trailing slash.
fn literal_prefix(template: &str) -> &str {
  let end = template.find('{').unwrap_or(template.len());
  template[..end].trim_end_matches('/')
}

#[cfg(test)]
mod tests {
  use super::*;

  const ORIGIN: &str = "https://www.yhflexiblebusbar.com";

  fn site_env(development: bool, preview: bool) -> SiteEnv {
    SiteEnv { development, preview, ..SiteEnv::default() }
  }

  #[test]
  fn preview_and_development_are_blocked() {
    assert_eq!(Indexing::from_site_env(&site_env(false, false)), Indexing::Allow);
    assert_eq!(Indexing::from_site_env(&site_env(true, false)), Indexing::Block);
    assert_eq!(Indexing::from_site_env(&site_env(false, true)), Indexing::Block);
  }

  #[test]
  fn blocked_site_disallows_everything() {
    let urls = SiteUrls::new("https://preview-123.vercel.app");
    let policy = RobotsPolicy::new(&urls, Indexing::Block);
    assert!(policy.allow.is_empty());
    assert_eq!(policy.disallow, ["/"]);
    assert_eq!(policy.host, FALLBACK_ORIGIN);
    assert_eq!(
      policy.render(),
      format!("User-Agent: *\nDisallow: /\n\nHost: {ORIGIN}\nSitemap: {ORIGIN}/sitemap.xml\n")
    );
  }

  #[test]
  fn indexed_site_blocks_api_only_without_prefix() {
    let policy = RobotsPolicy::new(&SiteUrls::new(ORIGIN), Indexing::Allow);
    assert_eq!(policy.allow, ["/"]);
    assert_eq!(policy.disallow, ["/api/"]);
    assert_eq!(policy.sitemap, format!("{ORIGIN}/sitemap.xml"));
  }

  #[test]
  fn prefixed_site_blocks_legacy_segments() {
    let urls = SiteUrls::new(ORIGIN).with_locale_prefix(LocalePrefix::Always);
    let policy = RobotsPolicy::new(&urls, Indexing::Allow);
    for path in ["/es/products", "/es/products/category", "/es/about", "/es/articles/hub"] {
      assert!(policy.disallow.iter().any(|d| d == path), "missing {path}");
    }
    assert!(!policy.disallow.iter().any(|d| d == "/es"));
    assert!(policy.render().contains("Allow: /\nDisallow: /api/\nDisallow: /es/"));
  }

  #[test]
  fn literal_prefix_stops_at_placeholder() {
    assert_eq!(literal_prefix("/products/category/{category}"), "/products/category");
    assert_eq!(literal_prefix("/about"), "/about");
    assert_eq!(literal_prefix("/"), "");
  }
}
