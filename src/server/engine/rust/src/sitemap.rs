/* src/server/engine/rust/src/sitemap.rs */

use serde::Serialize;

use crate::locale::Locale;
use crate::routes::RouteParams;
use crate::urls::{HreflangAlternates, SiteUrls};

pub const SITEMAP_PATH: &str = "/sitemap.xml";

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Section landing pages listed with weekly change frequency.
pub const SECTION_PAGES: &[&str] =
  &["home", "articles", "projects", "products", "solutions", "services"];
pub const PRODUCT_IDS: &[&str] = &[
  "flexible-busbar-2000a",
  "flexible-busbar-1500a",
  "flexible-busbar-2500a",
  "insulation-accessories",
];
pub const PRODUCT_CATEGORIES: &[&str] =
  &["general", "fire-resistant", "halogen-free", "low-smoke", "special-purpose"];
pub const PROJECT_IDS: &[&str] = &["1", "2", "3", "4", "5", "6", "7"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
  Weekly,
  Monthly,
}

impl ChangeFrequency {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Weekly => "weekly",
      Self::Monthly => "monthly",
    }
  }
}

/// One logical page; expanded to one sitemap entry per locale.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapPage {
  pub key: &'static str,
  pub params: Option<RouteParams>,
  pub change_frequency: ChangeFrequency,
  pub priority: f32,
}

impl SitemapPage {
  pub fn new(key: &'static str, change_frequency: ChangeFrequency, priority: f32) -> Self {
    Self { key, params: None, change_frequency, priority }
  }

  pub fn with_param(mut self, name: &str, value: &str) -> Self {
    let params = self.params.take().unwrap_or_default().with(name, value);
    self.params = Some(params);
    self
  }
}

/// Pages of the live site: section landings, then known product, category
/// and project detail pages.
pub fn site_pages() -> Vec<SitemapPage> {
  let sections = SECTION_PAGES.iter().map(|&key| {
    let priority = if key == "home" { 1.0 } else { 0.7 };
    SitemapPage::new(key, ChangeFrequency::Weekly, priority)
  });
  let products = PRODUCT_IDS.iter().map(|id| {
    SitemapPage::new("products-detail", ChangeFrequency::Monthly, 0.8).with_param("id", id)
  });
  let categories = PRODUCT_CATEGORIES.iter().map(|name| {
    SitemapPage::new("products-category", ChangeFrequency::Monthly, 0.7)
      .with_param("category", name)
  });
  let projects = PROJECT_IDS.iter().map(|id| {
    SitemapPage::new("projects-detail", ChangeFrequency::Monthly, 0.7).with_param("id", id)
  });
  sections.chain(products).chain(categories).chain(projects).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
  pub url: String,
  pub locale: Locale,
  pub change_frequency: ChangeFrequency,
  pub priority: f32,
  pub alternates: HreflangAlternates,
}

/// Localized absolute URL of every page in every locale. Alternates come
/// from the route key, so every locale of a page shares one alternate set.
pub fn build_sitemap(urls: &SiteUrls, pages: &[SitemapPage]) -> Vec<SitemapEntry> {
  let mut entries = Vec::with_capacity(pages.len() * Locale::ALL.len());
  for page in pages {
    let params = page.params.as_ref();
    let alternates = urls.route_alternates(page.key, params);
    for locale in Locale::ALL {
      entries.push(SitemapEntry {
        url: urls.localized_url(page.key, locale, params),
        locale,
        change_frequency: page.change_frequency,
        priority: page.priority,
        alternates: alternates.clone(),
      });
    }
  }
  entries
}

/// `urlset` document with `xhtml:link` hreflang alternates per entry.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
  let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
  out.push_str(&format!("<urlset xmlns=\"{SITEMAP_NS}\" xmlns:xhtml=\"{XHTML_NS}\">\n"));
  for entry in entries {
    out.push_str("<url>\n");
    out.push_str(&format!("<loc>{}</loc>\n", escape_xml(&entry.url)));
    for (tag, href) in entry.alternates.iter() {
      out.push_str(&format!(
        "<xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
        escape_xml(tag),
        escape_xml(href)
      ));
    }
    out.push_str(&format!("<changefreq>{}</changefreq>\n", entry.change_frequency.as_str()));
    out.push_str(&format!("<priority>{:.1}</priority>\n", entry.priority));
    out.push_str("</url>\n");
  }
  out.push_str("</urlset>\n");
  out
}

fn escape_xml(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&apos;"),
      c => out.push(c),
    }
  }
  out
}
