/* src/server/engine/rust/src/metadata/tests.rs */

use super::*;

const ORIGIN: &str = "https://www.yhflexiblebusbar.com";

fn urls() -> SiteUrls {
  SiteUrls::new(ORIGIN)
}

#[test]
fn strip_html_collapses_whitespace() {
  assert_eq!(strip_html("<p>Flexible <b>busbar</b></p>\n\n<p>guide</p>"), "Flexible busbar guide");
  assert_eq!(strip_html("plain"), "plain");
}

#[test]
fn truncate_respects_char_boundaries() {
  assert_eq!(truncate_chars("ñandú", 3), "ñan");
  assert_eq!(truncate_chars("short", 60), "short");
}

#[test]
fn detail_page_uses_content_copy() {
  let params = RouteParams::new().with("slug", "busbar-vs-cable");
  let content = PageContent {
    title: Some("Busbar vs Cable"),
    description: Some("<p>When flexible busbar beats cable.</p>"),
  };
  let meta =
    PageMetadata::for_route(&urls(), "articles-detail", Locale::Es, Some(&params), content);
  assert_eq!(meta.title, "Busbar vs Cable | Yanghua");
  assert_eq!(meta.description, "When flexible busbar beats cable.");
  assert_eq!(meta.path, "/articulos/busbar-vs-cable");
  assert_eq!(meta.canonical, format!("{ORIGIN}/articulos/busbar-vs-cable"));
  let en = format!("{ORIGIN}/articles/busbar-vs-cable");
  assert_eq!(meta.alternates.get("en"), Some(en.as_str()));
}

#[test]
fn detail_slug_matching_a_literal_keeps_its_route() {
  let params = RouteParams::new().with("slug", "hub");
  let content = PageContent::default();
  let meta =
    PageMetadata::for_route(&urls(), "articles-detail", Locale::En, Some(&params), content);
  assert_eq!(meta.path, "/articles/hub");
  assert_eq!(meta.alternates.get("es"), Some(format!("{ORIGIN}/articulos/hub").as_str()));
  assert_eq!(meta.alternates.x_default(), Some(format!("{ORIGIN}/articles/hub").as_str()));
}

#[test]
fn missing_copy_uses_section_defaults() {
  let content = PageContent::default();
  let meta = PageMetadata::for_route(&urls(), "solutions", Locale::Es, None, content);
  assert!(meta.title.starts_with("Soluciones de Barras Colectoras"));
  assert!(meta.description.starts_with("Soluciones fiables"));
}

#[test]
fn missing_copy_uses_site_defaults() {
  let meta = PageMetadata::for_route(&urls(), "contact", Locale::En, None, PageContent::default());
  assert_eq!(meta.title, "Yanghua Cable - Professional Cable Solutions");
  assert!(!meta.description.is_empty());
}

#[test]
fn blank_title_counts_as_missing() {
  let content = PageContent { title: Some("   "), description: Some("<br/>") };
  let meta = PageMetadata::for_route(&urls(), "about", Locale::Es, None, content);
  assert_eq!(meta.title, "Yanghua Cable - Soluciones Profesionales de Cable");
  assert!(meta.description.starts_with("Fabricante"));
}

#[test]
fn long_copy_is_truncated() {
  let long = "x".repeat(300);
  let content = PageContent { title: Some(&long), description: Some(&long) };
  let meta = PageMetadata::for_route(&urls(), "about", Locale::En, None, content);
  assert_eq!(meta.title.chars().count(), MAX_TITLE_CHARS);
  assert_eq!(meta.description.chars().count(), MAX_DESCRIPTION_CHARS);
}

#[test]
fn layout_skips_alternates_for_dynamic_params() {
  let by_id = RouteParams::new().with("id", "fb-200");
  assert!(layout_alternates(&urls(), "products", Some(&by_id)).is_empty());

  let by_name = RouteParams::new().with("name", "data-center");
  assert!(layout_alternates(&urls(), "solutions", Some(&by_name)).is_empty());
}

#[test]
fn layout_emits_section_alternates_without_dynamic_params() {
  let alts = layout_alternates(&urls(), "products", None);
  assert_eq!(alts.len(), 3);
  assert_eq!(alts.get("es"), Some(format!("{ORIGIN}/productos").as_str()));
  assert_eq!(alts.x_default(), Some(format!("{ORIGIN}/products").as_str()));

  let unrelated = RouteParams::new().with("page", "2");
  assert_eq!(layout_alternates(&urls(), "products", Some(&unrelated)), alts);
}

#[test]
fn metadata_serializes_camel_case() {
  let meta = PageMetadata::for_route(&urls(), "home", Locale::En, None, PageContent::default());
  let json = serde_json::to_value(&meta).unwrap();
  assert_eq!(json["canonical"], format!("{ORIGIN}/"));
  assert_eq!(json["locale"], "en");
  assert_eq!(json["alternates"]["x-default"], format!("{ORIGIN}/"));
}
